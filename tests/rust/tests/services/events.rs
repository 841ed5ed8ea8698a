//! Event service tests: time-range invariant and the query interface.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use tests::{event_router, send};

async fn create_event(router: &axum::Router, title: &str, start: &str, end: &str) -> Value {
    let (status, body) = send(
        router,
        Method::POST,
        "/api/events/query",
        Some(json!({
            "operation": "createEvent",
            "title": title,
            "start": start,
            "end": end,
            "userId": "u1",
            "priority": "MEDIUM",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "createEvent {title} failed: {body}");
    body["event"].clone()
}

#[tokio::test]
async fn inverted_time_range_is_rejected_and_not_stored() {
    let router = event_router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/events",
        Some(json!({
            "title": "backwards",
            "userId": "u1",
            "start": "2025-03-01T10:00:00",
            "end": "2025-03-01T09:00:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("must be strictly before"));

    // Nothing was stored.
    let (_, listing) = send(&router, Method::GET, "/api/events?userId=u1", None).await;
    assert!(listing["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn date_range_query_uses_containment_not_overlap() {
    let router = event_router();

    // Fully inside the queried window.
    let inside = create_event(&router, "inside", "2025-03-01T10:00:00", "2025-03-01T11:00:00").await;
    // Starts before the window: overlaps, must be excluded.
    create_event(&router, "straddles-start", "2025-02-28T23:00:00", "2025-03-01T01:00:00").await;
    // Ends after the window: overlaps, must be excluded.
    create_event(&router, "straddles-end", "2025-03-01T23:00:00", "2025-03-02T01:00:00").await;
    // Entirely outside.
    create_event(&router, "outside", "2025-04-01T10:00:00", "2025-04-01T11:00:00").await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({
            "operation": "eventsByDateRange",
            "start": "2025-03-01T00:00:00",
            "end": "2025-03-02T00:00:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], inside["id"]);
    assert_eq!(events[0]["title"], "inside");
}

#[tokio::test]
async fn boundary_touching_events_are_contained() {
    let router = event_router();
    // start == window start and end == window end both count as contained.
    create_event(&router, "exact", "2025-03-01T00:00:00", "2025-03-02T00:00:00").await;

    let (_, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({
            "operation": "eventsByDateRange",
            "start": "2025-03-01T00:00:00",
            "end": "2025-03-02T00:00:00",
        })),
    )
    .await;
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn query_event_by_id_and_delete() {
    let router = event_router();
    let created = create_event(&router, "standup", "2025-03-01T09:00:00", "2025-03-01T09:15:00").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "event", "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["title"], "standup");

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "deleteEvent", "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "event", "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_re_checks_the_time_range() {
    let router = event_router();
    let created = create_event(&router, "ok", "2025-03-01T09:00:00", "2025-03-01T10:00:00").await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({
            "operation": "updateEvent",
            "id": id,
            "title": "still ok?",
            "start": "2025-03-01T11:00:00",
            "end": "2025-03-01T10:30:00",
            "userId": "u1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stored event is untouched.
    let (_, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "event", "id": id })),
    )
    .await;
    assert_eq!(body["event"]["title"], "ok");
}

#[tokio::test]
async fn events_by_user_returns_only_that_users_events() {
    let router = event_router();
    create_event(&router, "mine", "2025-03-01T09:00:00", "2025-03-01T10:00:00").await;

    let (_, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "eventsByUser", "userId": "u1" })),
    )
    .await;
    assert_eq!(body["events"].as_array().unwrap().len(), 1);

    let (_, body) = send(
        &router,
        Method::POST,
        "/api/events/query",
        Some(json!({ "operation": "eventsByUser", "userId": "someone-else" })),
    )
    .await;
    assert!(body["events"].as_array().unwrap().is_empty());
}
