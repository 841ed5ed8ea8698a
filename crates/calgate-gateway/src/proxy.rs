//! Request forwarding
//!
//! The gateway's job ends at resolving the backend and deciding whether
//! the request is admitted; the network call is delegated to reqwest.
//! Method, path + query, headers, and body pass through unchanged in
//! both directions, with obvious hop-by-hop exceptions.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::routes::RouteTable;

/// Shared state of the proxy handler: the immutable route table and one
/// reused HTTP client.
pub struct ProxyState {
    pub table: RouteTable,
    pub client: reqwest::Client,
}

impl ProxyState {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            client: reqwest::Client::new(),
        }
    }
}

/// Strip headers that must not be forwarded verbatim.
fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    out.remove(header::HOST);
    out.remove(header::CONTENT_LENGTH);
    out
}

/// Catch-all handler: resolve the backend for the request path and relay
/// the exchange.
pub async fn forward(
    State(state): State<Arc<ProxyState>>,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let path = request.uri().path().to_string();
    let route = state.table.resolve(&path)?;
    let backend = route.backend.clone();

    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or_else(|| path.clone(), |pq| pq.as_str().to_string());
    let url = format!("{backend}{path_and_query}");

    debug!(%path, %backend, "forwarding request");

    let method = request.method().clone();
    let headers = forwardable_headers(request.headers());
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| {
            warn!(%path, error = %e, "failed to buffer request body");
            GatewayError::Body(e.to_string())
        })?;

    let upstream = state
        .client
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|source| GatewayError::Forward {
            backend: backend.clone(),
            source,
        })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    response_headers.remove(header::TRANSFER_ENCODING);
    let bytes = upstream
        .bytes()
        .await
        .map_err(|source| GatewayError::Forward { backend, source })?;

    let mut response = (status, bytes).into_response();
    response
        .headers_mut()
        .extend(response_headers.into_iter().filter_map(|(name, value)| {
            name.map(|name| (name, value))
        }));
    Ok(response)
}
