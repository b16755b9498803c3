//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx against
//! a single-file SQLite database.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
