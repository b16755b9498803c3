//! Long URL validation.

use crate::error::AppError;

/// Validates a long URL before it reaches the allocator.
///
/// Only the scheme prefix is checked: the URL must start with `http://` or
/// `https://`. Anything stricter would reject inputs the service has always
/// accepted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is empty or carries a
/// different scheme.
pub fn validate_long_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::bad_request("URL is required"));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::bad_request(
            "URL must start with http:// or https://",
        ));
    }

    Ok(())
}
