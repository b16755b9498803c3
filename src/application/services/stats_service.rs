//! Usage statistics service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Number of records returned by the recent listing.
pub const RECENT_LIMIT: i64 = 10;

/// Service for basic usage statistics.
///
/// Exposes the total record count and a capped newest-first listing. Both
/// are straight reads against the repository.
pub struct StatsService {
    repository: Arc<dyn UrlRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Total number of shortened URLs ever created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn total(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// The [`RECENT_LIMIT`] most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn recent(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.recent(RECENT_LIMIT).await
    }
}
