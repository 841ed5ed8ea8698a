//! # Calgate Gateway
//!
//! The single entry point in front of the backend services. Two jobs:
//! resolve an inbound path to a backend address by longest-prefix match
//! over a static route table, and enforce the configured CORS policy
//! before anything is forwarded. The network call itself is delegated
//! to a plain HTTP client.

pub mod cors;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod server;

pub use cors::CorsPolicy;
pub use error::GatewayError;
pub use routes::{Route, RouteTable};
pub use server::{GatewayConfig, GatewayServer};
