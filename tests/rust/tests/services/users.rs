//! User service tests: register/login field matching and CRUD mapping.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use tests::{send, user_router};

fn ada() -> serde_json::Value {
    json!({ "email": "ada@example.com", "name": "Ada", "password": "pw" })
}

#[tokio::test]
async fn register_assigns_an_id_and_links() {
    let router = user_router();
    let (status, body) = send(&router, Method::POST, "/api/users/register", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["_links"]["self"]["href"], format!("/api/users/{id}"));
    assert_eq!(body["_links"]["all-users"]["href"], "/api/users");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let router = user_router();
    send(&router, Method::POST, "/api/users/register", Some(ada())).await;

    let (status, body) = send(&router, Method::POST, "/api/users/register", Some(ada())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email already registered");
}

#[tokio::test]
async fn register_requires_all_fields() {
    let router = user_router();
    let (status, _) = send(
        &router,
        Method::POST,
        "/api/users/register",
        Some(json!({ "email": "x@y.z", "name": "", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_matches_fields_and_returns_the_user() {
    let router = user_router();
    send(&router, Method::POST, "/api/users/register", Some(ada())).await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "ada@example.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada");
    // Plain field matching: the response carries no token of any kind.
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn login_failures_are_401s() {
    let router = user_router();
    send(&router, Method::POST, "/api/users/register", Some(ada())).await;

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "ada@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/users/login",
        Some(json!({ "email": "nobody@example.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_removes_the_user() {
    let router = user_router();
    let (_, created) = send(&router, Method::POST, "/api/users/register", Some(ada())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&router, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
