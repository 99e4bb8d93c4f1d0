//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address as `IP:port`, host names are not resolved
//!   (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORTEN_MAX_ATTEMPTS` - Code generation attempts per create request
//!   (default: 10, range: 1-100)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on generate-and-insert attempts for one create request.
    pub shorten_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            shorten_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORTEN_MAX_ATTEMPTS` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let shorten_max_attempts = match env::var("SHORTEN_MAX_ATTEMPTS") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("SHORTEN_MAX_ATTEMPTS must be a number, got '{value}'"))?,
            Err(_) => defaults.shorten_max_attempts,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            shorten_max_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` socket address
    /// - `log_format` is not `text` or `json`
    /// - `shorten_max_attempts` is outside `1..=100`
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(1..=100).contains(&self.shorten_max_attempts) {
            anyhow::bail!(
                "SHORTEN_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.shorten_max_attempts
            );
        }

        Ok(())
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "LISTEN must be in format 'ip:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Returns whether logs are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Shorten max attempts: {}", self.shorten_max_attempts);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
