//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, is_unique_violation};

/// SQLite repository for short URL storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters. `created_at` is
/// bound explicitly rather than left to the column default so the value
/// round-trips through sqlx's chrono encoding exactly.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = ?1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;

        Ok(found != 0)
    }

    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (short_code, long_url, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.long_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateCode(new_url.short_code.clone())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
