//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure built once at
//! startup from the command line and environment, then shared read-only for
//! the lifetime of the process.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Default Ganjinex API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ganjinex.com";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Exchange endpoint and credential configuration.
    pub exchange: ExchangeConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream exchange API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Base URL of the exchange REST API.
    pub base_url: String,

    /// Account token attached to every outbound request (`X-Token` header).
    pub token: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Ganjinex".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the process arguments and environment.
    ///
    /// The first positional argument is the exchange token and is required;
    /// an absent or empty token is a startup error. Environment variables
    /// (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `GANJINEX_BASE_URL`) override
    /// the defaults.
    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let token = args
            .nth(1)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::config("TOKEN is required"))?;

        Ok(Self::from_env(token))
    }

    /// Build the configuration around an already-acquired token.
    ///
    /// Environment variables are read through `dotenvy`, so a local `.env`
    /// file works the same as the real environment.
    pub fn from_env(token: String) -> Self {
        dotenvy::dotenv().ok();

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        let base_url = match std::env::var("GANJINEX_BASE_URL") {
            Ok(url) => {
                info!("Exchange base URL overridden from environment");
                url.trim_end_matches('/').to_string()
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        Self {
            server,
            exchange: ExchangeConfig { base_url, token },
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let result = Config::from_args(args(&["ganjinex_mcp_server"]));
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("TOKEN is required"));
    }

    #[test]
    fn test_empty_token_is_fatal() {
        let result = Config::from_args(args(&["ganjinex_mcp_server", ""]));
        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_first_argument() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        let config = Config::from_args(args(&["ganjinex_mcp_server", "secret-token"])).unwrap();
        assert_eq!(config.exchange.token, "secret-token");
    }

    #[test]
    fn test_default_base_url() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("GANJINEX_BASE_URL");
        }
        let config = Config::from_env("token".to_string());
        assert_eq!(config.exchange.base_url, "https://api.ganjinex.com");
    }

    #[test]
    fn test_base_url_from_env_trims_trailing_slash() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GANJINEX_BASE_URL", "http://localhost:9999/");
        }
        let config = Config::from_env("token".to_string());
        assert_eq!(config.exchange.base_url, "http://localhost:9999");
        unsafe {
            std::env::remove_var("GANJINEX_BASE_URL");
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let exchange = ExchangeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: "super_secret_token".to_string(),
        };
        let debug_str = format!("{:?}", exchange);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
