//! Handler for the health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Returns service status and the current time.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always succeeds; no storage round-trip is involved.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
