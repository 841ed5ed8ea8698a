//! End-to-end proxy tests: a real backend on an ephemeral port, the
//! gateway's proxy router driven by oneshot in front of it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::{extract::Path, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;

use calgate_gateway::proxy::{self, ProxyState};
use calgate_gateway::{Route, RouteTable};
use tests::send;

/// Spin up a minimal todo backend on an ephemeral port.
async fn spawn_backend() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/api/todos/{id}",
        get(|Path(id): Path<String>| async move { Json(json!({ "echo": id })) }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn proxy_router(table: RouteTable) -> Router {
    Router::new()
        .fallback(proxy::forward)
        .with_state(Arc::new(ProxyState::new(table)))
}

#[tokio::test]
async fn requests_are_relayed_to_the_resolved_backend() {
    let backend = spawn_backend().await;
    let table = RouteTable::new(vec![Route::new("/api/todos", format!("http://{backend}"))]);
    let gateway = proxy_router(table);

    let (status, body) = send(&gateway, Method::GET, "/api/todos/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["echo"], "42");
}

#[tokio::test]
async fn longest_prefix_picks_the_right_backend() {
    let backend = spawn_backend().await;
    let table = RouteTable::new(vec![
        // Decoy with a shorter prefix pointing nowhere.
        Route::new("/api/to", "http://127.0.0.1:1".to_string()),
        Route::new("/api/todos", format!("http://{backend}")),
    ]);
    let gateway = proxy_router(table);

    let (status, body) = send(&gateway, Method::GET, "/api/todos/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["echo"], "7");
}

#[tokio::test]
async fn unmatched_path_is_a_404() {
    let gateway = proxy_router(RouteTable::default());
    let (status, body) = send(&gateway, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no route found for path /metrics");
}

#[tokio::test]
async fn unreachable_backend_is_a_502() {
    // Port 1 is never listening.
    let table = RouteTable::new(vec![Route::new("/api/todos", "http://127.0.0.1:1")]);
    let gateway = proxy_router(table);

    let (status, _) = send(&gateway, Method::GET, "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
