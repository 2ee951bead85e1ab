//! Tracing subscriber setup.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to the configured file so they never draw over the terminal UI.
pub fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Sends logs to stderr, keeping stdout clean for machine-readable output.
pub fn init_stderr_logging(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init();
}
