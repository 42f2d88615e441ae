//! CLI argument parsing for pingpong.
//!
//! Uses clap derive macros for declarative argument definitions. Every flag
//! is optional; running `pingpong` with no arguments generates the full
//! built-in series into the default output directory.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Pingpong: generate the AI Ping-Pong expert opinion series.
///
/// Composes one opinion piece per topic through a fixed nine-stage template
/// pipeline and writes the pieces, `topics.json`, `metadata.json` and
/// `summary.md` to the output directory.
#[derive(Parser, Debug)]
#[command(name = "pingpong")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the config file).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON topics file to use instead of the built-in series.
    #[arg(long, value_name = "PATH")]
    pub topics: Option<PathBuf>,

    /// Suppress the console report.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
