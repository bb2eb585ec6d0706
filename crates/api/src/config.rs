//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the service starts with local-development
//! defaults when none are set.
//!
//! - `SECUREVISION_HOST` - Bind address (default: 127.0.0.1)
//! - `SECUREVISION_PORT` - Listen port (default: 3000)
//! - `SECUREVISION_CORS_ALLOW_ORIGIN` - Browser origin allowed by CORS,
//!   or `*` for any origin (default: `*`)
//! - `SENTRY_DSN` - Sentry error tracking DSN (tracking disabled if unset)
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (default: development)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Browser origin allowed by CORS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    /// Any origin (`*`).
    Any,
    /// A single configured origin.
    Origin(HeaderValue),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Browser origin allowed by CORS
    pub cors_allow_origin: CorsOrigin,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    /// Nothing is required; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SECUREVISION_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SECUREVISION_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("SECUREVISION_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SECUREVISION_PORT".to_string(), e.to_string())
            })?;
        let cors_allow_origin = parse_cors_origin(
            "SECUREVISION_CORS_ALLOW_ORIGIN",
            &get_env_or_default("SECUREVISION_CORS_ALLOW_ORIGIN", "*"),
        )?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_env_or_default("SENTRY_ENVIRONMENT", "development");

        Ok(Self {
            host,
            port,
            cors_allow_origin,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            cors_allow_origin: CorsOrigin::Any,
            sentry_dsn: None,
            sentry_environment: "development".to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a CORS origin value; `*` allows any origin.
fn parse_cors_origin(key: &str, value: &str) -> Result<CorsOrigin, ConfigError> {
    if value == "*" {
        return Ok(CorsOrigin::Any);
    }
    HeaderValue::from_str(value)
        .map(CorsOrigin::Origin)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..ApiConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_default_binds_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.cors_allow_origin, CorsOrigin::Any);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_parse_cors_origin_wildcard() {
        let origin = parse_cors_origin("TEST_VAR", "*").unwrap();
        assert_eq!(origin, CorsOrigin::Any);
    }

    #[test]
    fn test_parse_cors_origin_specific() {
        let origin = parse_cors_origin("TEST_VAR", "https://securevision.example").unwrap();
        assert_eq!(
            origin,
            CorsOrigin::Origin(HeaderValue::from_static("https://securevision.example"))
        );
    }

    #[test]
    fn test_parse_cors_origin_rejects_invalid_header_value() {
        let result = parse_cors_origin("TEST_VAR", "https://bad\norigin");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
