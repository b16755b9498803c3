//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so a missing field is reported as
/// the service's own 400 validation error rather than a framework 422.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}
