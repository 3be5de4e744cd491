//! Cart backend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUFFICIUS_API_BASE_URL` - Base URL of the commerce backend
//!
//! ## Optional
//! - `SUFFICIUS_API_TOKEN` - Bearer token attached to backend calls
//! - `SUFFICIUS_API_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart backend API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct CartApiConfig {
    /// Base URL of the commerce backend (e.g., `https://api.sufficius.com`)
    pub base_url: String,
    /// Bearer token attached to backend calls
    pub api_token: Option<SecretString>,
    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for CartApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CartApiConfig {
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

        let base_url = get_required_env("SUFFICIUS_API_BASE_URL")?;
        let api_token = std::env::var("SUFFICIUS_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        let timeout = parse_timeout(
            std::env::var("SUFFICIUS_API_TIMEOUT_SECS").ok().as_deref(),
        )?;

        Ok(Self {
            base_url,
            api_token,
            timeout,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parse the timeout variable, falling back to the default when unset.
fn parse_timeout(value: Option<&str>) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "SUFFICIUS_API_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(
            parse_timeout(None).unwrap(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn timeout_parses_seconds() {
        assert_eq!(parse_timeout(Some("5")).unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn timeout_rejects_garbage() {
        let err = parse_timeout(Some("soon")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "SUFFICIUS_API_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_redacts_token() {
        let config = CartApiConfig {
            base_url: "https://api.sufficius.test".to_string(),
            api_token: Some(SecretString::from("super-secret")),
            timeout: Duration::from_secs(30),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }
}
