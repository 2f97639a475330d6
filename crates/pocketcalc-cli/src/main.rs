//! Pocketcalc: a pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc                        # Interactive calculator
//! pocketcalc --no-mouse             # Keyboard only
//! pocketcalc --keys "7+3-2="        # Replay keys, print "8"
//! pocketcalc --log-file calc.log -vv
//! ```

use clap::Parser;
use pocketcalc_cli::{init_logging, run_interactive, run_script, Cli, CliConfig, CliResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::resolve(&cli)?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    init_logging(&config)?;

    match cli.keys.as_deref() {
        Some(keys) => {
            print!("{}", run_script(keys)?);
            Ok(())
        }
        None => run_interactive(&config),
    }
}
