//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts; request handlers never consult the environment.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full database URL
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db"
//! ```
//!
//! ### Method 2: Data directory (the URL is constructed)
//!
//! ```bash
//! export DATA_DIR="/var/lib/url-shortener"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built as `sqlite://<DATA_DIR>/urls.db`
//! with `DATA_DIR` defaulting to `./data`. The database file and its parent
//! directory are created on startup if missing.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Public prefix for constructed short URLs
//!   (default: `http://localhost:5000`)
//! - `INDEX_FILE` - Path to the web interface document (default: `index.html`)
//! - `CODE_LENGTH` - Short code length (default: 6, max: 64)
//! - `MAX_ATTEMPTS` - Collision retry budget (default: 5)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public prefix used to construct `short_url` values in responses.
    pub base_url: String,
    pub index_file: PathBuf,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Allocation retry budget before a shorten request fails.
    pub max_attempts: u32,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let index_file = env::var("INDEX_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("index.html"));

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let max_attempts = env::var("MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            index_file,
            code_length,
            max_attempts,
            request_timeout_secs,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL with fallback to a data-directory path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed as `sqlite://<DATA_DIR>/urls.db` (`DATA_DIR` defaults
    ///    to `./data`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        format!("sqlite://{}/urls.db", data_dir.trim_end_matches('/'))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - `code_length` is 0 or exceeds the hash digest length
    /// - `max_attempts` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.max_attempts == 0 {
            anyhow::bail!("MAX_ATTEMPTS must be at least 1");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Path of the SQLite database file, if the URL points at one.
    ///
    /// Returns `None` for in-memory databases.
    pub fn database_file(&self) -> Option<PathBuf> {
        let path = self
            .database_url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");

        if path.is_empty() || path.starts_with(':') {
            return None;
        }

        Some(PathBuf::from(path))
    }

    /// Prints a configuration summary at startup.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Max allocation attempts: {}", self.max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite://./data/urls.db".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            base_url: "http://localhost:5000".to_string(),
            index_file: PathBuf::from("index.html"),
            code_length: 6,
            max_attempts: 5,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite://./data/urls.db".to_string();

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:5000".to_string();

        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "http://localhost:5000".to_string();

        config.code_length = 0;
        assert!(config.validate().is_err());
        config.code_length = 65;
        assert!(config.validate().is_err());
        config.code_length = 6;

        config.max_attempts = 0;
        assert!(config.validate().is_err());
        config.max_attempts = 5;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_file_extraction() {
        let mut config = base_config();
        assert_eq!(
            config.database_file(),
            Some(PathBuf::from("./data/urls.db"))
        );

        config.database_url = "sqlite::memory:".to_string();
        assert_eq!(config.database_file(), None);
    }

    #[test]
    #[serial]
    fn test_load_database_url_from_data_dir() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("DATA_DIR", "/var/lib/shortener/");
        }

        let url = Config::load_database_url();
        assert_eq!(url, "sqlite:///var/lib/shortener/urls.db");

        // Cleanup
        unsafe {
            env::remove_var("DATA_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_database_url_takes_priority() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://custom.db");
            env::set_var("DATA_DIR", "/ignored");
        }

        let url = Config::load_database_url();
        assert_eq!(url, "sqlite://custom.db");

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATA_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATA_DIR");
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("CODE_LENGTH");
            env::remove_var("MAX_ATTEMPTS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://./data/urls.db");
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);
        assert_eq!(config.max_attempts, 5);
    }
}
