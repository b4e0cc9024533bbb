//! CLI entry point - the composition root.
//!
//! Logging and environment are set up here, then commands are dispatched to
//! handlers with the process-wide metadata from `eventmeta-runtime`.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use eventmeta_cli::{Cli, CliError, Commands, handlers, init_tracing, load_env};
use eventmeta_runtime::event_metadata;

fn run(command: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Show { pretty } => {
            let metadata = event_metadata()?;
            handlers::show::execute(&metadata, pretty, &mut out)?;
        }
        Commands::Get { key } => {
            let key = handlers::get::parse_key(&key)?;
            let metadata = event_metadata()?;
            handlers::get::execute(&metadata, key, &mut out)?;
        }
        Commands::Keys => {
            handlers::keys::execute(&mut out)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Overrides must be in the environment before the metadata is first read
    if let Err(err) = load_env(cli.env_file.as_deref()) {
        eprintln!("eventmeta: {err}");
        return Ok(ExitCode::from(err.exit_code()));
    }

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(ExitCode::SUCCESS);
    };

    match run(command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("eventmeta: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
