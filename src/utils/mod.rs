//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Candidate short-code construction
//! - [`url_guard`] - Long URL validation

pub mod code_generator;
pub mod url_guard;
