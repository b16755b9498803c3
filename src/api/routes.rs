//! Route configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Web interface or built-in usage page
//! - `GET  /health`  - Health check
//! - `POST /shorten` - Create a short URL
//! - `GET  /stats`   - Aggregate statistics
//! - `GET  /list`    - 10 most recent short URLs
//! - `GET  /{code}`  - Short link redirect
//!
//! Static paths are registered alongside the `/{code}` capture; Axum
//! prefers the static match, so `/health`, `/stats`, and `/list` are never
//! shadowed by the redirect route.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers::{
    health_handler, index_handler, list_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - conservative per-request deadline; no handler is
///   expected to block beyond a single storage round-trip
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/list", get(list_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(tracing::layer())
}
