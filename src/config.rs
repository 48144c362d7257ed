//! Configuration management for the Clay MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! The configuration is read once at startup and handed by reference to the
//! authenticator and the HTTP client; nothing reads the environment afterwards.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL of the Clay tools API.
pub const DEFAULT_API_BASE_URL: &str = "https://nexum.clay.earth/tools";

/// Transport used to talk to the MCP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP bound to `host:port`
    Http,
}

impl TransportMode {
    /// `"http"` selects the HTTP transport; any other value falls back to stdio.
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("http") {
            TransportMode::Http
        } else {
            TransportMode::Stdio
        }
    }
}

/// Configuration for the Clay MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Clay tools API base URL
    pub clay_api_url: String,

    /// Default API key, used when a connection supplies no `clayApiKey`
    pub clay_api_key: String,

    /// Transport selected by `TRANSPORT`
    pub transport: TransportMode,

    /// Bind address for the HTTP transport
    pub host: String,

    /// Port for the HTTP transport (default: 8080)
    pub port: u16,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CLAY_API_KEY`: Default API key (default: empty)
    /// - `CLAY_API_BASE_URL`: Base URL for the Clay tools API
    /// - `TRANSPORT`: `http` for streamable HTTP, otherwise stdio
    /// - `HOST`: HTTP bind address (default: "0.0.0.0")
    /// - `PORT`: HTTP port (default: 8080)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        // We use dotenvy::dotenv() which doesn't print to stdout
        let _ = dotenvy::dotenv();

        let clay_api_url =
            env::var("CLAY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !clay_api_url.starts_with("http://") && !clay_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CLAY_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // A missing key is not an error here; the backend rejects unauthorized calls.
        let clay_api_key = env::var("CLAY_API_KEY").unwrap_or_default();

        let transport = env::var("TRANSPORT")
            .map(|v| TransportMode::from_env_value(&v))
            .unwrap_or(TransportMode::Stdio);

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = Self::parse_env_u16("PORT", 8080)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            clay_api_url,
            clay_api_key,
            transport,
            host,
            port,
            request_timeout,
            log_level,
        })
    }

    /// Socket address string for the HTTP transport.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clay_api_url: DEFAULT_API_BASE_URL.to_string(),
            clay_api_key: String::new(),
            transport: TransportMode::Stdio,
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: 30,
            log_level: "info".to_string(),
        }
    }
}
