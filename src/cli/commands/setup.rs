//! Configuration loading and logging setup shared by all commands.

use crate::core::config::{ClientConfig, ConfigOverrides};
use anyhow::{Context, Result};
use std::path::Path;

/// Load the client configuration and apply CLI overrides.
///
/// Without a config file the defaults are used.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ClientConfig> {
    let mut config = match path {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("failed to load config from {:?}", path))?,
        None => ClientConfig::default(),
    };

    config.apply_overrides(overrides);
    config
        .validate()
        .with_context(|| "invalid configuration after applying overrides")?;
    Ok(config)
}

/// Initialize tracing subscriber if the telemetry feature is enabled.
///
/// `RUST_LOG` takes precedence over `level`.
#[cfg(feature = "telemetry")]
pub fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so command output stays clean.
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_level: &str) {}
