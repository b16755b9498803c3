//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with the original URL in the `Location` header. The status
/// is a plain 302 rather than Axum's 307 helper so caches and clients see
/// the classic shortener behavior.
///
/// # Errors
///
/// Returns 404 Not Found with a JSON error body if the short code doesn't
/// exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener.resolve(&code).await?;

    debug!(code = %code, long_url = %record.long_url, "redirecting");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        record.long_url.parse().map_err(|_| {
            AppError::Internal(format!("stored URL is not a valid Location header: {code}"))
        })?,
    );

    Ok((StatusCode::FOUND, headers))
}
