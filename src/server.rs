//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, migrations, service wiring, and the Axum server
//! lifecycle.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::api::routes::app_router;
use crate::application::services::{ShortenerService, StatsService};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created if missing)
/// - Embedded migrations
/// - Allocator and statistics services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    if let Some(db_file) = config.database_file() {
        if let Some(parent) = db_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
    }

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database at {}", config.database_url);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let repository: Arc<dyn UrlRepository> = Arc::new(SqliteUrlRepository::new(pool));

    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        config.base_url.clone(),
        config.code_length,
        config.max_attempts,
    ));
    let stats = Arc::new(StatsService::new(repository));

    let state = AppState::new(shortener, stats, config.index_file.clone());

    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let addr: SocketAddr = config.listen_addr.parse().context("Invalid LISTEN address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
