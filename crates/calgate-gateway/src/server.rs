//! Gateway server
//!
//! Thin axum shell around the route table and CORS policy: a catch-all
//! proxy handler behind the CORS and trace layers. Constructing the
//! server validates the policy, so a misconfigured gateway fails at
//! startup instead of serving broken responses.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cors::CorsPolicy;
use crate::error::GatewayError;
use crate::proxy::{self, ProxyState};
use crate::routes::RouteTable;

/// Gateway configuration: bind address, route table, CORS policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Prefix-to-backend dispatch table
    pub routes: RouteTable,
    /// Cross-origin policy applied before dispatch
    pub cors: CorsPolicy,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            routes: RouteTable::default(),
            cors: CorsPolicy::default(),
        }
    }
}

impl GatewayConfig {
    /// Load a full gateway configuration from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

/// The gateway HTTP server.
pub struct GatewayServer {
    addr: SocketAddr,
    router: Router,
}

impl GatewayServer {
    /// Build a gateway from its configuration.
    ///
    /// Fails with `InvalidCorsPolicy` when the policy combines a
    /// wildcard origin with allow-credentials; that error is fatal and
    /// the caller must not serve traffic.
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let cors = config.cors.to_layer()?;
        let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

        for route in config.routes.routes() {
            info!("[Gateway] route {} -> {}", route.prefix, route.backend);
        }

        let state = Arc::new(ProxyState::new(config.routes));
        let router = Router::new()
            .fallback(proxy::forward)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        Ok(Self { addr, router })
    }

    /// The bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the gateway until the process shuts down.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("[Gateway] listening on {}", self.addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }

    /// Run the gateway in a background task.
    pub fn spawn(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
