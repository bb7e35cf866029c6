//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDERS_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `ORDERS_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDERS_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Order service configuration.
#[derive(Debug, Clone)]
pub struct OrdersConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl OrdersConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("ORDERS_DATABASE_URL")?;
        let host = get_env_or_default("ORDERS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORDERS_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = OrdersConfig {
            database_url: SecretString::from("postgres://localhost/orders"),
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
        };

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("ORDERS_TEST_VAR_THAT_IS_NEVER_SET", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("ORDERS_DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: ORDERS_DATABASE_URL"
        );

        let err = ConfigError::InvalidEnvVar("ORDERS_PORT".to_string(), "bad port".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable ORDERS_PORT: bad port"
        );
    }
}
