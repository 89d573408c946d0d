//! Client configuration parsing and validation.
//!
//! Configuration is loaded from TOML files with CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level auth client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Connection settings.
    #[serde(default)]
    pub client: ConnectionConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Connection settings for the etcd v3 endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Endpoint URI (e.g., "http://127.0.0.1:2379").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Per-request deadline in milliseconds (0 = none).
    #[serde(default)]
    pub request_timeout_ms: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: 0,
        }
    }
}

impl ConnectionConfig {
    /// Connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Request deadline, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.request_timeout_ms))
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// CLI overrides applied on top of the file configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:2379".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: ClientConfig =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ClientConfig =
            toml::from_str(content).with_context(|| "failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides to the configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref endpoint) = overrides.endpoint {
            self.client.endpoint = endpoint.clone();
        }
        if let Some(ref log_level) = overrides.log_level {
            self.telemetry.log_level = log_level.clone();
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.validate_client()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_client(&self) -> Result<()> {
        let endpoint = &self.client.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!(
                "client.endpoint must start with http:// or https://, got: {}",
                endpoint
            );
        }

        if self.client.connect_timeout_ms == 0 {
            anyhow::bail!("client.connect_timeout_ms must be > 0");
        }

        Ok(())
    }

    fn validate_telemetry(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "telemetry.log_level must be one of {:?}, got: {}",
                valid_levels,
                self.telemetry.log_level
            );
        }
        Ok(())
    }
}
