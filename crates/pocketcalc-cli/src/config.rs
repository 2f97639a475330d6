//! CLI configuration
//!
//! Settings come from three layers: built-in defaults, an optional YAML
//! file and command-line flags. Later layers win.

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - lifecycle events
    #[default]
    Normal,
    /// Verbose - every operation
    Verbose,
    /// Debug - every key press
    Debug,
}

impl Verbosity {
    /// Map a `-v` count and `-q` flag to a level, if either was given
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Option<Self> {
        if quiet {
            return Some(Self::Quiet);
        }
        match verbose {
            0 => None,
            1 => Some(Self::Verbose),
            _ => Some(Self::Debug),
        }
    }

    /// `tracing` filter directive for this level
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log verbosity level
    pub verbosity: Verbosity,
    /// Log line format
    pub log_format: LogFormat,
    /// Capture mouse clicks on the keypad
    pub mouse_capture: bool,
    /// Log destination; logs are discarded when unset
    pub log_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            log_format: LogFormat::Text,
            mouse_capture: true,
            log_file: None,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Parse configuration from YAML text. Missing fields keep their defaults.
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(text).map_err(|e| CliError::config(e.to_string()))
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CliError::config(e.to_string()))
    }

    /// Apply command-line flags on top of this configuration
    #[must_use]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(verbosity) = Verbosity::from_flags(cli.verbose, cli.quiet) {
            self.verbosity = verbosity;
        }
        if cli.no_mouse {
            self.mouse_capture = false;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    /// Build the effective configuration: defaults, then `--config`, then flags
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.merge_cli(cli))
    }
}
