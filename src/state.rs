//! Shared application state injected into HTTP handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{ShortenerService, StatsService};

/// Application state shared across all request handlers.
///
/// Services are constructed once at startup and injected through Axum's
/// state extractor; nothing here is process-global.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub stats: Arc<StatsService>,
    /// Path of the optional web interface document served at `/`.
    pub index_file: PathBuf,
}

impl AppState {
    /// Creates application state from constructed services.
    pub fn new(
        shortener: Arc<ShortenerService>,
        stats: Arc<StatsService>,
        index_file: PathBuf,
    ) -> Self {
        Self {
            shortener,
            stats,
            index_file,
        }
    }
}
