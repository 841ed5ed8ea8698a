//! Static route table with longest-prefix resolution
//!
//! The table is plain data loaded at startup and immutable afterwards;
//! no locking is needed on the request path. Resolution picks the entry
//! with the longest prefix the path starts with, so `/api/events/42`
//! lands on `/api/events` even when a shorter `/api/ev` entry exists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// One (path-prefix, backend-address) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path prefix the route matches ("/api/todos")
    pub prefix: String,
    /// Backend base address ("http://localhost:8083")
    pub backend: String,
}

impl Route {
    pub fn new(prefix: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            backend: backend.into(),
        }
    }
}

/// Immutable prefix-to-backend dispatch table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    /// The standard local deployment: one backend service per resource.
    fn default() -> Self {
        Self::new(vec![
            Route::new("/api/events", "http://localhost:8081"),
            Route::new("/api/users", "http://localhost:8082"),
            Route::new("/api/todos", "http://localhost:8083"),
            Route::new("/api/categories", "http://localhost:8085"),
        ])
    }
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Load a table from a JSON file (`{"routes": [{"prefix": ..., "backend": ...}]}`).
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let table: Self = serde_json::from_str(&raw)?;
        Ok(table)
    }

    /// The configured routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a request path to the backend with the longest matching
    /// prefix. Fails with `NoRouteFound` when nothing matches.
    pub fn resolve(&self, path: &str) -> Result<&Route, GatewayError> {
        self.routes
            .iter()
            .filter(|route| path.starts_with(&route.prefix))
            .max_by_key(|route| route.prefix.len())
            .ok_or_else(|| GatewayError::NoRouteFound(path.to_string()))
    }
}
