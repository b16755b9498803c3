//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code allocation and lookup
//! - [`services::stats_service::StatsService`] - Usage statistics

pub mod services;
