//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are usable before any resource is opened.

use super::Config;
use crate::error::ConfigError;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `DATABASE_PATH` is empty
/// - `PORT` is 0
/// - `BIND_ADDRESS` is not an IP address
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    // Port 0 would bind an ephemeral port nobody knows about
    if config.port == 0 {
        return Err(ConfigError::InvalidValue {
            var: "PORT".into(),
            reason: "must not be 0".into(),
        });
    }

    config.socket_addr()?;

    Ok(())
}
