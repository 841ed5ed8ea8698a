//! # Calgate REST surface
//!
//! One axum `Router` per backend service (users, todos, categories,
//! events), each served on its own listener behind the gateway. Handlers
//! stay thin: extract, call the domain service, map the result. Status
//! codes are decided here and nowhere deeper.

pub mod categories;
pub mod events;
pub mod query;
pub mod response;
pub mod todos;
pub mod users;

pub use response::ApiError;

use std::net::SocketAddr;

use axum::{response::IntoResponse, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Liveness endpoint shared by every backend service.
pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// A backend service bound to its own address.
///
/// Mirrors the gateway's run/spawn lifecycle so the launcher can treat
/// all five servers uniformly.
pub struct BackendServer {
    name: &'static str,
    addr: SocketAddr,
    router: Router,
}

impl BackendServer {
    /// Wrap a service router for serving on `host:port`.
    pub fn new(
        name: &'static str,
        host: &str,
        port: u16,
        router: Router,
    ) -> anyhow::Result<Self> {
        let addr: SocketAddr = format!("{host}:{port}").parse()?;
        Ok(Self {
            name,
            addr,
            router: router.layer(TraceLayer::new_for_http()),
        })
    }

    /// The bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until the process shuts down.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("[{}] listening on {}", self.name, self.addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }

    /// Serve in a background task.
    pub fn spawn(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
