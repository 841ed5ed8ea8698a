//! Todo service flow tests: create, links, toggle, not-found mapping.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use tests::{send, todo_router};

#[tokio::test]
async fn create_toggle_toggle_round_trip() {
    let router = todo_router();

    // Create: completed defaults to false, links include self and toggle.
    let (status, created) = send(
        &router,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "x", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["completed"], false);
    assert_eq!(created["description"], "");

    let id = created["id"].as_str().unwrap().to_string();
    let self_href = created["_links"]["self"]["href"].as_str().unwrap();
    let toggle_href = created["_links"]["toggle"]["href"].as_str().unwrap();
    assert_eq!(self_href, format!("/api/todos/{id}"));
    assert_eq!(toggle_href, format!("/api/todos/{id}/toggle"));
    assert_eq!(
        created["_links"]["user-todos"]["href"],
        "/api/todos?userId=u1"
    );

    // First toggle flips to true.
    let (status, toggled) = send(&router, Method::PATCH, toggle_href, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["completed"], true);

    // Second toggle flips back to false.
    let (status, toggled) = send(&router, Method::PATCH, toggle_href, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["completed"], false);
}

#[tokio::test]
async fn missing_title_is_a_400() {
    let router = todo_router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title is required");
}

#[tokio::test]
async fn caller_supplied_id_is_rejected_on_create() {
    let router = todo_router();
    let (status, _) = send(
        &router,
        Method::POST,
        "/api/todos",
        Some(json!({ "id": "mine", "title": "x", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_id_is_a_404_carrying_the_id() {
    let router = todo_router();
    let (status, body) = send(&router, Method::GET, "/api/todos/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "could not find todo nope");
}

#[tokio::test]
async fn update_keeps_the_path_id_over_an_embedded_one() {
    let router = todo_router();
    let (_, created) = send(
        &router,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "before", "userId": "u1" })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &router,
        Method::PUT,
        &format!("/api/todos/{id}"),
        Some(json!({ "id": "smuggled", "title": "after", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "after");

    let (status, _) = send(&router, Method::GET, "/api/todos/smuggled", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_a_404() {
    let router = todo_router();
    let (_, created) = send(
        &router,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "x", "userId": "u1" })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&router, Method::DELETE, &format!("/api/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, Method::GET, &format!("/api/todos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_scoped_to_the_requested_owner() {
    let router = todo_router();
    for (title, user) in [("a", "u1"), ("b", "u1"), ("c", "u2")] {
        send(
            &router,
            Method::POST,
            "/api/todos",
            Some(json!({ "title": title, "userId": user })),
        )
        .await;
    }

    let (status, body) = send(&router, Method::GET, "/api/todos?userId=u1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["_links"]["self"]["href"], "/api/todos?userId=u1");
    // Per-item self links are present too.
    assert!(body["items"][0]["_links"]["self"]["href"].is_string());
}
