//! Domain layer containing business entities and contracts.
//!
//! Defines the core data structures and the repository trait implemented by
//! the infrastructure layer. The domain layer has no dependency on the HTTP
//! or persistence layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
