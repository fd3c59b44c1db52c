//! Rutter - route query CLI for small directed weighted networks
//!
//! Reads a textual edge list describing the network, builds the graph,
//! and answers route existence, enumeration, and shortest-path queries.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use rutter_core::error::ExitCode as RutterExitCode;
use rutter_core::format::OutputFormat;
use rutter_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::from(RutterExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
