//! Command-line adapter for eventmeta.
//!
//! Parses arguments, loads environment overrides, and prints the
//! process-wide event metadata collected by `eventmeta-runtime`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use eventmeta_runtime as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{init_tracing, load_env};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
