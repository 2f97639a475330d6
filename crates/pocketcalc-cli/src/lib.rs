//! Pocketcalc CLI library
//!
//! Command line, configuration and logging for the `pocketcalc` binary,
//! plus the terminal event loop and the headless `--keys` replay.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::Cli;
pub use config::{CliConfig, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{build_filter, init_logging};
pub use runner::{event_loop, handle_event, run_interactive, run_script, ScriptReport};
