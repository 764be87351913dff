//! # Logging
//!
//! `tracing` subscriber setup. Logs always go to stderr so that stdout stays a
//! clean manifest stream.

use crate::config::CliConfig;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set, otherwise `default_target` logs at the configured
/// level.
pub fn init_logging(config: &CliConfig, default_target: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config, default_target).into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.log_enable_color);

    let result = if config.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn default_directive(config: &CliConfig, default_target: &str) -> String {
    format!(
        "{default_target}={level},ocm_log_forwarder={level}",
        level = config.log_level.to_lowercase()
    )
}
