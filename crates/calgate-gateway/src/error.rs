//! Gateway error kinds

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors produced while admitting, resolving, or forwarding a request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No route table prefix matches the request path (404-equivalent)
    #[error("no route found for path {0}")]
    NoRouteFound(String),

    /// The configured CORS policy is invalid. Fatal at startup; the
    /// gateway refuses to serve traffic with a broken policy.
    #[error("invalid CORS policy: {0}")]
    InvalidCorsPolicy(String),

    /// The resolved backend could not be reached (502-equivalent)
    #[error("forwarding to {backend} failed: {source}")]
    Forward {
        backend: String,
        #[source]
        source: reqwest::Error,
    },

    /// The inbound request body could not be buffered (400-equivalent)
    #[error("failed to read request body: {0}")]
    Body(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoRouteFound(_) => StatusCode::NOT_FOUND,
            Self::Forward { .. } => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            // Never reachable while serving; validation happens at startup.
            Self::InvalidCorsPolicy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
