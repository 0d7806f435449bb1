use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. This endpoint is public
    /// and does not require authentication; it exists for load balancers,
    /// container orchestrators, and monitoring tools.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
