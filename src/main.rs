//! Pingpong: template-driven generator for the AI Ping-Pong expert series.
//!
//! This is the main entry point for the `pingpong` CLI. It parses arguments,
//! sets up logging, runs the generation command, and maps errors to exit
//! codes.

mod cli;
mod commands;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod output;
pub mod report;
pub mod run;

use cli::Cli;
use commands::RunOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let result = RunOptions::from_cli(&cli).and_then(|options| commands::cmd_generate(&options));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialize tracing on stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "pingpong=warn",
        1 => "pingpong=debug",
        _ => "pingpong=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
