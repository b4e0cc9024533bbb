//! Available subcommands.

use clap::Subcommand;

/// Available commands for the eventmeta tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the event metadata as a JSON object
    Show {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print a single metadata value
    Get {
        /// Metadata key (e.g., "ram", "screenSize")
        key: String,
    },

    /// List the metadata keys in payload order
    Keys,
}
