//! Category service tests: sequential ids and owner-scoped listing.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use tests::{category_router, send};

#[tokio::test]
async fn ids_count_up_from_one() {
    let router = category_router();

    let (status, first) = send(
        &router,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Work", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], "1");
    assert_eq!(
        first["_links"]["user-categories"]["href"],
        "/api/categories?userId=u1"
    );

    let (_, second) = send(
        &router,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Home", "userId": "u1" })),
    )
    .await;
    assert_eq!(second["id"], "2");
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let router = category_router();
    send(
        &router,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Work", "userId": "u1" })),
    )
    .await;
    send(&router, Method::DELETE, "/api/categories/1", None).await;

    let (_, next) = send(
        &router,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Home", "userId": "u1" })),
    )
    .await;
    assert_eq!(next["id"], "2");
}

#[tokio::test]
async fn update_of_unknown_category_is_a_404() {
    let router = category_router();
    let (status, _) = send(
        &router,
        Method::PUT,
        "/api/categories/99",
        Some(json!({ "name": "Ghost", "userId": "u1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
