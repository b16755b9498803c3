//! Application error taxonomy and HTTP mapping.
//!
//! Every error response body is a JSON object with a single `error` string.
//! Database failures are logged server-side and surfaced with an opaque
//! message; validation and lookup errors carry their own text.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Request input rejected before any storage access (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Unknown short code (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Short code already present in the store. Raised by the insert path on
    /// a unique-constraint violation; the allocator treats it as a collision
    /// and retries, so it normally never reaches a client.
    #[error("short code already exists: {0}")]
    DuplicateCode(String),

    /// Collision retry budget exhausted without a unique code (HTTP 500).
    #[error("failed to generate a unique short code")]
    AllocationExhausted,

    /// Any other storage failure (HTTP 500 with a generic body).
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Unclassified internal failure (HTTP 500 with a generic body).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::DuplicateCode(code) => {
                tracing::warn!(code = %code, "duplicate short code surfaced to client");
                (
                    StatusCode::CONFLICT,
                    "Short code already exists".to_string(),
                )
            }
            AppError::AllocationExhausted => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate unique short code".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Returns true if the error is a unique-constraint violation, i.e. the
/// generated short code lost the check-then-insert race.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
