//! Category service endpoints
//!
//! Plain CRUD under `/api/categories`. Category ids come from the
//! sequential strategy, so they read as small decimal numbers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use calgate_core::{Category, CategoryService};

use crate::response::ApiError;
use crate::todos::OwnerFilter;

/// Build the category service router.
pub fn router(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", post(create).get(list))
        .route(
            "/api/categories/{id}",
            get(get_one).put(update).delete(remove),
        )
        .route("/health", get(crate::health))
        .with_state(service)
}

async fn create(
    State(service): State<Arc<CategoryService>>,
    Json(category): Json<Category>,
) -> Result<impl IntoResponse, ApiError> {
    let created = service.create(category).await?;
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
    State(service): State<Arc<CategoryService>>,
    Query(filter): Query<OwnerFilter>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.list_by_owner(&filter.user_id).await?))
}

async fn get_one(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.get(&id).await?))
}

async fn update(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
    Json(category): Json<Category>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.update(&id, category).await?))
}

async fn remove(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
