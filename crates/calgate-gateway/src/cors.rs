//! CORS policy configuration and validation
//!
//! The policy is declarative data validated once at startup. The one
//! combination the web platform forbids - wildcard origin together with
//! allow-credentials - is rejected as a configuration error before the
//! gateway serves any traffic, instead of surfacing as silently broken
//! responses later.

use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::GatewayError;

const WILDCARD: &str = "*";

/// Allow-list CORS policy applied in front of every forwarded request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorsPolicy {
    /// Allowed origins; `["*"]` means any origin
    pub allowed_origins: Vec<String>,

    /// Allowed methods; `["*"]` means any method
    pub allowed_methods: Vec<String>,

    /// Allowed request headers; `["*"]` means any header
    pub allowed_headers: Vec<String>,

    /// Whether credentialed requests are allowed. Incompatible with a
    /// wildcard origin.
    pub allow_credentials: bool,
}

impl Default for CorsPolicy {
    /// Permissive development policy: any origin, any header, no credentials.
    fn default() -> Self {
        Self {
            allowed_origins: vec![WILDCARD.to_string()],
            allowed_methods: ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            allowed_headers: vec![WILDCARD.to_string()],
            allow_credentials: false,
        }
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

impl CorsPolicy {
    /// Check the policy for forbidden combinations.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if is_wildcard(&self.allowed_origins) && self.allow_credentials {
            return Err(GatewayError::InvalidCorsPolicy(
                "wildcard origin cannot be combined with allow-credentials".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the tower-http layer for this policy. Validates first, so a
    /// broken policy never reaches the middleware stack.
    pub fn to_layer(&self) -> Result<CorsLayer, GatewayError> {
        self.validate()?;

        let origins = if is_wildcard(&self.allowed_origins) {
            AllowOrigin::any()
        } else {
            let parsed = self
                .allowed_origins
                .iter()
                .map(|origin| {
                    origin.parse::<HeaderValue>().map_err(|_| {
                        GatewayError::InvalidCorsPolicy(format!("invalid origin: {origin}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(parsed)
        };

        let methods = if is_wildcard(&self.allowed_methods) {
            AllowMethods::any()
        } else {
            let parsed = self
                .allowed_methods
                .iter()
                .map(|method| {
                    method.parse::<Method>().map_err(|_| {
                        GatewayError::InvalidCorsPolicy(format!("invalid method: {method}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowMethods::list(parsed)
        };

        let headers = if is_wildcard(&self.allowed_headers) {
            AllowHeaders::any()
        } else {
            let parsed = self
                .allowed_headers
                .iter()
                .map(|header| {
                    header.parse::<HeaderName>().map_err(|_| {
                        GatewayError::InvalidCorsPolicy(format!("invalid header: {header}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowHeaders::list(parsed)
        };

        let mut layer = CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers);
        if self.allow_credentials {
            layer = layer.allow_credentials(true);
        }
        Ok(layer)
    }
}
