//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting telemetry event metadata.
#[derive(Parser)]
#[command(name = "eventmeta")]
#[command(about = "Show the device metadata attached to telemetry events")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Load environment overrides from this file instead of ./.env
    #[arg(long = "env-file", global = true, env = "EVENTMETA_ENV_FILE")]
    pub env_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
