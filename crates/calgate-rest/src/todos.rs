//! Todo service endpoints
//!
//! `GET/POST /api/todos`, `GET/PUT/DELETE /api/todos/{id}`, and the
//! partial `PATCH /api/todos/{id}/toggle` operation.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;

use calgate_core::{Todo, TodoService};

use crate::response::ApiError;

/// Owner filter for collection requests (`?userId=...`).
#[derive(Debug, Deserialize)]
pub struct OwnerFilter {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Build the todo service router.
pub fn router(service: Arc<TodoService>) -> Router {
    Router::new()
        .route("/api/todos", post(create).get(list))
        .route(
            "/api/todos/{id}",
            get(get_one).put(update).delete(remove),
        )
        .route("/api/todos/{id}/toggle", patch(toggle))
        .route("/health", get(crate::health))
        .with_state(service)
}

async fn create(
    State(service): State<Arc<TodoService>>,
    Json(todo): Json<Todo>,
) -> Result<impl IntoResponse, ApiError> {
    let created = service.create(todo).await?;
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
    State(service): State<Arc<TodoService>>,
    Query(filter): Query<OwnerFilter>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.list_by_owner(&filter.user_id).await?))
}

async fn get_one(
    State(service): State<Arc<TodoService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.get(&id).await?))
}

async fn update(
    State(service): State<Arc<TodoService>>,
    Path(id): Path<String>,
    Json(todo): Json<Todo>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.update(&id, todo).await?))
}

async fn toggle(
    State(service): State<Arc<TodoService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.toggle(&id).await?))
}

async fn remove(
    State(service): State<Arc<TodoService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
