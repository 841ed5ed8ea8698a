//! Domain-error to HTTP-status mapping
//!
//! The only place where `CalendarError` meets status codes: validation
//! failures are 400s, missing resources are 404s, failed login matching
//! is a 401. Nothing here is retried or converted further down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use calgate_core::CalendarError;

/// Transport-boundary wrapper for domain errors.
#[derive(Debug)]
pub struct ApiError(pub CalendarError);

impl From<CalendarError> for ApiError {
    fn from(err: CalendarError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CalendarError::MissingField { .. }
            | CalendarError::IdentitySupplied { .. }
            | CalendarError::InvalidTimeRange { .. }
            | CalendarError::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
            CalendarError::NotFound { .. } => StatusCode::NOT_FOUND,
            CalendarError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
        };

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
