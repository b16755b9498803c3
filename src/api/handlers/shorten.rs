//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_guard::validate_long_url;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with
///
/// ```json
/// {
///   "short_code": "e149be",
///   "short_url": "http://localhost:5000/e149be",
///   "long_url": "https://www.example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or does not start with
/// `http://` or `https://`; validation happens before any storage access.
/// Returns 500 Internal Server Error if the collision retry budget is
/// exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let long_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required"))?;

    validate_long_url(&long_url)?;

    let record = state.shortener.shorten(long_url).await?;
    let short_url = state.shortener.short_url(&record.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: record.short_code,
            short_url,
            long_url: record.long_url,
        }),
    ))
}
