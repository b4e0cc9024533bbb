//! Process setup for the CLI: environment file and logging.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// Load environment overrides.
///
/// An explicit `env_file` must exist and parse. Without one, `./.env` (or the
/// first `.env` in a parent directory) is loaded if present. Returns the path
/// that was loaded.
pub fn load_env(env_file: Option<&Path>) -> Result<Option<PathBuf>, CliError> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
            Ok(Some(path.to_path_buf()))
        }
        None => Ok(dotenvy::dotenv().ok()),
    }
}

/// Initialize tracing on stderr so stdout stays machine readable.
///
/// Log level is controlled by `RUST_LOG` (default: warn, or debug with `--verbose`).
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized

    debug!(verbose, "Tracing initialized");
}
