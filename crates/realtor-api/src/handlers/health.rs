//! Liveness and health handlers.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Plaintext liveness probe at the root path.
pub async fn liveness() -> &'static str {
    "Realtor is running"
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
