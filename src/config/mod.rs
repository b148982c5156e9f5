//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use records_service::config::{Config, DEFAULT_PORT};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "./data.db".to_string(),
//!     bind_address: "0.0.0.0".to_string(),
//!     port: DEFAULT_PORT,
//!     log_level: "info".to_string(),
//! };
//!
//! assert_eq!(config.socket_addr().unwrap().port(), 8080);
//! ```

mod validation;

pub use validation::validate_config;

use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data.db";

/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default listener port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database path.
    pub database_path: String,
    /// Address the listener binds to.
    pub bind_address: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.into(),
            bind_address: DEFAULT_BIND_ADDRESS.into(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data.db`)
    /// - `BIND_ADDRESS`: Listener address (default: `0.0.0.0`)
    /// - `PORT`: Listener port (default: `8080`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `PORT` is not a valid port number
    /// - Any value fails validation (see [`validate_config`])
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.into());

        let port = parse_env_u16("PORT", DEFAULT_PORT)?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            database_path,
            bind_address,
            port,
            log_level,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Socket address the listener binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bind_address` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".into(),
                reason: format!("'{}' is not an IP address", self.bind_address),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter for the subscriber.
///
/// `RUST_LOG` wins when set and valid; otherwise `level` is used, and an
/// unparseable `level` falls back to [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Parse an environment variable as u16, using a default if not set.
fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be an integer between 1 and 65535".into(),
        })
    })
}
