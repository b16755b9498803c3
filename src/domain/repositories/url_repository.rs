//! Repository trait for short URL data access.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persistent short-code to URL mapping.
///
/// Every operation is a single synchronous round-trip to durable storage;
/// there is no in-memory cache. Uniqueness of `short_code` is enforced by
/// the store itself, which makes [`UrlRepository::insert`] safe to retry
/// from the allocator even when the existence check races a concurrent
/// writer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns whether a record with the given short code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already
    /// present (unique-constraint violation), enabling safe retry by the
    /// allocator. Returns [`AppError::Database`] on other storage errors.
    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Counts all records ever inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the most recently created records, newest first, capped at
    /// `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;
}
