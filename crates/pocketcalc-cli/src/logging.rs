//! Logging setup
//!
//! The terminal belongs to the calculator UI while it runs, so log output
//! only ever goes to a file. Without a log file no subscriber is installed
//! and events are dropped.

use crate::config::{CliConfig, LogFormat, Verbosity};
use crate::error::{CliError, CliResult};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Build the event filter. A valid `RUST_LOG` value takes precedence over
/// the configured verbosity.
#[must_use]
pub fn build_filter(verbosity: Verbosity, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.filter()))
}

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init_logging(config: &CliConfig) -> CliResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logging(format!("cannot open {}: {e}", path.display())))?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(config.verbosity, rust_log.as_deref());

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);
    let layer = match config.log_format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        verbosity = ?config.verbosity,
        "logging initialised"
    );
    Ok(true)
}
