//! DTOs for the service statistics endpoint.

use serde::Serialize;

/// Aggregate service statistics plus static metadata.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_shortened_urls: i64,
    pub service: &'static str,
    pub version: &'static str,
}
