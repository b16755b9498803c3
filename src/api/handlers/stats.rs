//! Handler for the service statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the total number of shortened URLs plus static service metadata.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let total = state.stats.total().await?;

    Ok(Json(StatsResponse {
        total_shortened_urls: total,
        service: "URL Shortener",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
