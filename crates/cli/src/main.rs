//! # Timeframes CLI
//!
//! Command-line entry point: argument parsing, logging setup, and command
//! dispatch. Results go to stdout; logs go to stderr.

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_next, run_same, run_series, run_start};
use observability::ObservabilityConfig;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    info!(version = env!("CARGO_PKG_VERSION"), "timeframes CLI starting");

    let result = match &cli.command {
        Commands::Same(args) => run_same(args),
        Commands::Next(args) => run_next(args),
        Commands::Start(args) => run_start(args),
        Commands::Series(args) => run_series(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "command failed");
    }

    result
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let default_log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.clone().into(),
        default_log_level: default_log_level.to_string(),
    })
}
