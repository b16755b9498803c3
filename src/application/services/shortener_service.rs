//! Short code allocation and lookup service.

use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::candidate_code;

/// Service for allocating collision-free short codes and resolving them.
///
/// Allocation pairs a hash-based candidate generator with a bounded retry
/// loop against the repository. The existence check is an optimization; the
/// store's unique constraint is what actually guarantees safety when two
/// requests race on the same candidate.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    code_length: usize,
    max_attempts: u32,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public prefix used to construct short URLs;
    /// `code_length` and `max_attempts` come from [`crate::config::Config`].
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        base_url: String,
        code_length: usize,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            base_url,
            code_length,
            max_attempts,
        }
    }

    /// Allocates a unique short code for a validated URL and persists the
    /// record.
    ///
    /// # Algorithm
    ///
    /// For each attempt up to the configured budget: generate a candidate,
    /// skip it if it already exists, otherwise insert. An insert that loses
    /// the check-then-act race (unique violation) counts as a collision and
    /// moves on to the next attempt.
    ///
    /// Shortening the same URL twice intentionally yields two distinct
    /// records; there is no deduplication by URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] if every attempt collides.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn shorten(&self, long_url: String) -> Result<UrlRecord, AppError> {
        for attempt in 0..self.max_attempts {
            let code = candidate_code(&long_url, attempt, self.code_length);

            if self.repository.exists(&code).await? {
                tracing::debug!(code = %code, attempt, "short code collision, retrying");
                continue;
            }

            match self
                .repository
                .insert(NewUrl {
                    short_code: code,
                    long_url: long_url.clone(),
                })
                .await
            {
                Ok(record) => {
                    tracing::info!(
                        code = %record.short_code,
                        long_url = %record.long_url,
                        "shortened URL"
                    );
                    return Ok(record);
                }
                // Lost the race to a concurrent writer; the constraint
                // caught it, treat as a collision.
                Err(AppError::DuplicateCode(code)) => {
                    tracing::debug!(code = %code, attempt, "insert raced, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationExhausted)
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
