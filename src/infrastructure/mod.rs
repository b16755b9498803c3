//! Infrastructure layer for external integrations.
//!
//! Contains concrete implementations of domain repository traits.

pub mod persistence;
