//! Url record entity representing a short code to long URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short URL mapping.
///
/// Records are immutable once created and are never deleted; `created_at`
/// is non-decreasing with `id` (insertion order).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new record.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_code: String,
    pub long_url: String,
}
