//! Show command handler.

use std::io::Write;

use eventmeta_core::EventMetadata;

use crate::error::CliError;

/// Write the metadata as one JSON object, followed by a newline.
pub fn execute(
    metadata: &EventMetadata,
    pretty: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, metadata)?;
    } else {
        serde_json::to_writer(&mut *out, metadata)?;
    }
    writeln!(out)?;
    Ok(())
}
