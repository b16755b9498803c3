//! DTOs for the recent listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A recently created short URL.
#[derive(Debug, Serialize)]
pub struct RecentUrl {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

/// Response listing the most recently created short URLs, newest first.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub recent_urls: Vec<RecentUrl>,
    pub total_count: usize,
}
