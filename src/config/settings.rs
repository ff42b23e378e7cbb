//! Application configuration settings
//!
//! Defines the demo binary's configuration structures and loading logic.
//! The client library itself reads no environment; it takes an explicit
//! `ClientConfig` built from these settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Placeholder endpoint shipped in example configs
const PLACEHOLDER_ENDPOINT: &str = "https://your-gateway.example.workers.dev";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Chat gateway configuration
    pub gateway: GatewayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Chat gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL
    pub endpoint: String,
    /// API key forwarded to the underlying provider
    pub api_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            gateway: GatewayConfig {
                endpoint: get_env_or_default("GATEWAY_URL", PLACEHOLDER_ENDPOINT),
                api_key: std::env::var("GATEWAY_API_KEY")
                    .context("GATEWAY_API_KEY environment variable not set")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate URL format
        if !self.gateway.endpoint.starts_with("http") {
            anyhow::bail!("Invalid gateway endpoint format, should start with 'http'");
        }

        // Validate API key format - accept various formats for different providers
        if self.gateway.api_key.is_empty() {
            anyhow::bail!("Gateway API key cannot be empty");
        }

        // Basic format validation - ensure no whitespace and minimum length
        if self.gateway.api_key.contains(char::is_whitespace) {
            anyhow::bail!("Gateway API key cannot contain whitespace characters");
        }

        if self.gateway.api_key.len() < 8 {
            anyhow::bail!("Gateway API key must be at least 8 characters long");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether the settings still carry placeholder example values
    pub fn is_placeholder(&self) -> bool {
        self.gateway.endpoint.contains("your-gateway")
            || self.gateway.api_key.starts_with("sk-xxx")
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
