//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. A separate
//! `NewUrl` struct carries creation input before an id and timestamp exist.

pub mod url_record;

pub use url_record::{NewUrl, UrlRecord};
