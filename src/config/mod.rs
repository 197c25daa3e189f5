//! # Configuration Module
//!
//! This module handles loading configuration from environment variables.
//! All settings are centralized here and every knob has a default, so the
//! service starts with no environment at all.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SERVER_HOST` | HTTP server host | `127.0.0.1` |
//! | `SERVER_PORT` | HTTP server port | `5050` |
//! | `BCRYPT_COST` | bcrypt work factor for password hashing | `10` |

use std::env;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse a value
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

/// Application configuration loaded from environment variables.
///
/// ## Example
///
/// ```rust,ignore
/// dotenvy::dotenv().ok(); // Load .env file
/// let config = AppConfig::from_env()?;
/// println!("Listening on {}:{}", config.server_host, config.server_port);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server host address.
    ///
    /// Use `127.0.0.1` for localhost only, `0.0.0.0` to accept
    /// connections from any interface.
    pub server_host: String,

    /// HTTP server port number.
    pub server_port: u16,

    /// bcrypt work factor used when hashing signup passwords.
    ///
    /// Higher values slow hashing exponentially. Tests drop this to the
    /// bcrypt minimum.
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Use `dotenvy::dotenv()` before calling this to load from a `.env`
    /// file. Only fails when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_host: get_env_or_default("SERVER_HOST", "127.0.0.1"),
            server_port: get_env_or_default("SERVER_PORT", "5050")
                .parse()
                .map_err(|e| {
                    ConfigError::ParseError("SERVER_PORT".to_string(), format!("{}", e))
                })?,
            bcrypt_cost: get_env_or_default("BCRYPT_COST", "10")
                .parse()
                .map_err(|e| {
                    ConfigError::ParseError("BCRYPT_COST".to_string(), format!("{}", e))
                })?,
        })
    }
}

/// Get an environment variable with a default value.
///
/// Returns the default if the variable is not set.
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default() {
        // Should return default when not set
        let value = get_env_or_default("NONEXISTENT_VAR_12345", "default_value");
        assert_eq!(value, "default_value");
    }
}
