//! # URL Shortener
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows a layered design with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Short-code allocation and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence via sqlx
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and routes
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: where the SQLite file lives (default: ./data/urls.db)
//! export DATA_DIR="./data"
//!
//! # Start the service (listens on 0.0.0.0:5000 by default)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, StatsService};
    pub use crate::domain::entities::{NewUrl, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
