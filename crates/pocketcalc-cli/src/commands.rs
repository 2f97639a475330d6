//! CLI command definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Pocketcalc: a pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level of the log file (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(long, env = "POCKETCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long, env = "POCKETCALC_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse; keypad buttons then only light up
    #[arg(long)]
    pub no_mouse: bool,

    /// Replay keys without a UI and print the result.
    ///
    /// Digits, `.`, `+ - * /`, `=` and `%` as typed; `c` is AC and `<` is
    /// backspace. Spaces are ignored.
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}
