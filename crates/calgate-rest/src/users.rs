//! User service endpoints
//!
//! CRUD under `/api/users` plus the register/login field-matching
//! operations. Login succeeds or fails synchronously; no token or
//! session is issued, so there is nothing to validate on later calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use calgate_core::{Credentials, User, UserService};

use crate::response::ApiError;

/// Build the user service router.
pub fn router(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(list))
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route(
            "/api/users/{id}",
            get(get_one).put(update).delete(remove),
        )
        .route("/health", get(crate::health))
        .with_state(service)
}

async fn register(
    State(service): State<Arc<UserService>>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, ApiError> {
    let created = service.register(user).await?;
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

async fn login(
    State(service): State<Arc<UserService>>,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.login(credentials).await?))
}

async fn list(State(service): State<Arc<UserService>>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.list_all().await?))
}

async fn get_one(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.get(&id).await?))
}

async fn update(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(service.update(&id, user).await?))
}

async fn remove(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
