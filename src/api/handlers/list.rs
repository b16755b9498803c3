//! Handler for the recent URL listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::list::{ListResponse, RecentUrl};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the 10 most recently created short URLs, newest first.
///
/// # Endpoint
///
/// `GET /list`
///
/// `total_count` is the number of records in the listing, not the total
/// table size; use `/stats` for the latter.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<ListResponse>, AppError> {
    let records = state.stats.recent().await?;

    let recent_urls: Vec<RecentUrl> = records
        .into_iter()
        .map(|record| {
            let short_url = state.shortener.short_url(&record.short_code);
            RecentUrl {
                short_code: record.short_code,
                long_url: record.long_url,
                created_at: record.created_at,
                short_url,
            }
        })
        .collect();

    let total_count = recent_urls.len();

    Ok(Json(ListResponse {
        recent_urls,
        total_count,
    }))
}
