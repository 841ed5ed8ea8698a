//! Event service endpoints
//!
//! REST CRUD under `/api/events` plus the query interface at
//! `POST /api/events/query` (see [`crate::query`]).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use calgate_core::{Event, EventService};

use crate::query::{self, EventQuery};
use crate::response::ApiError;
use crate::todos::OwnerFilter;

/// Build the event service router.
pub fn router(service: Arc<EventService>) -> Router {
    Router::new()
        .route("/api/events", post(create).get(list))
        .route("/api/events/query", post(run_query))
        .route(
            "/api/events/{id}",
            get(get_one).put(update).delete(remove),
        )
        .route("/health", get(crate::health))
        .with_state(service)
}

async fn create(
    State(service): State<Arc<EventService>>,
    Json(event): Json<Event>,
) -> Result<impl IntoResponse, ApiError> {
    let created = service.create(event).await?;
    let location = created
        .links
        .get("self")
        .map(|link| link.href.clone())
        .unwrap_or_default();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn list(
    State(service): State<Arc<EventService>>,
    Query(filter): Query<OwnerFilter>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.list_by_owner(&filter.user_id).await?))
}

async fn get_one(
    State(service): State<Arc<EventService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.get(&id).await?))
}

async fn update(
    State(service): State<Arc<EventService>>,
    Path(id): Path<String>,
    Json(event): Json<Event>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.update(&id, event).await?))
}

async fn remove(
    State(service): State<Arc<EventService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn run_query(
    State(service): State<Arc<EventService>>,
    Json(operation): Json<EventQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(query::execute(&service, operation).await?))
}
