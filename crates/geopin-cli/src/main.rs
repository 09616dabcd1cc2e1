//! Geopin CLI - Command-line interface
//!
//! Reads a point, runs it through the formatter, and prints the results.

mod cli;
mod commands;
mod config;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use errors::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing; stderr keeps stdout parseable under --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute the command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => cli_err.display(),
                None => CliError::new(format!("{:#}", err)).display(),
            }
            ExitCode::FAILURE
        }
    }
}
