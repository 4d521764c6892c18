//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Base URL of the National Weather Service API.
pub const DEFAULT_NWS_BASE_URL: &str = "https://api.weather.gov";

/// Base URL of the Yahoo Finance chart API.
pub const DEFAULT_QUOTE_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Base URL used to build the human-facing quote link.
pub const DEFAULT_QUOTE_LINK_BASE: &str = "https://finance.yahoo.com/quote";

/// User agent sent with NWS requests.
pub const DEFAULT_USER_AGENT: &str = "weather-app/1.0";

/// User agent sent with quote requests. Yahoo rejects non-browser agents.
pub const DEFAULT_QUOTE_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Upstream request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API endpoints used by the tools.
    pub apis: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Endpoints and client settings for the upstream HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// NWS API base, without trailing slash.
    pub nws_base_url: String,

    /// Quote API base, without trailing slash.
    pub quote_base_url: String,

    /// Prefix of the `link` field returned by `get_stockprice`.
    pub quote_link_base: String,

    /// User-Agent header for NWS requests.
    pub user_agent: String,

    /// User-Agent header for quote requests.
    pub quote_user_agent: String,

    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl ApiConfig {
    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            nws_base_url: DEFAULT_NWS_BASE_URL.to_string(),
            quote_base_url: DEFAULT_QUOTE_BASE_URL.to_string(),
            quote_link_base: DEFAULT_QUOTE_LINK_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            quote_user_agent: DEFAULT_QUOTE_USER_AGENT.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "market-weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            apis: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_NWS_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_NWS_BASE_URL") {
            config.apis.nws_base_url = trim_base(&url);
            info!("NWS base URL overridden: {}", config.apis.nws_base_url);
        }

        if let Ok(url) = std::env::var("MCP_QUOTE_BASE_URL") {
            config.apis.quote_base_url = trim_base(&url);
            info!("Quote base URL overridden: {}", config.apis.quote_base_url);
        }

        if let Ok(url) = std::env::var("MCP_QUOTE_LINK_BASE") {
            config.apis.quote_link_base = trim_base(&url);
        }

        if let Ok(agent) = std::env::var("MCP_USER_AGENT") {
            config.apis.user_agent = agent;
        }

        if let Ok(agent) = std::env::var("MCP_QUOTE_USER_AGENT") {
            config.apis.quote_user_agent = agent;
        }

        if let Ok(timeout) = std::env::var("MCP_REQUEST_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => config.apis.request_timeout_ms = ms,
                Err(_) => warn!(
                    "Ignoring invalid MCP_REQUEST_TIMEOUT_MS={:?}, using {}ms",
                    timeout, DEFAULT_REQUEST_TIMEOUT_MS
                ),
            }
        }

        config
    }

    /// Check the values that would make every upstream call fail.
    pub fn validate(&self) -> Result<()> {
        if self.apis.request_timeout_ms == 0 {
            return Err(Error::config("request timeout must be greater than zero"));
        }
        for (key, value) in [
            ("nws_base_url", &self.apis.nws_base_url),
            ("quote_base_url", &self.apis.quote_base_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(Error::config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
