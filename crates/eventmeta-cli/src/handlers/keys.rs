//! Keys command handler.

use std::io::Write;

use eventmeta_core::MetadataKey;

use crate::error::CliError;

/// Write every metadata key on its own line, in payload order.
pub fn execute(out: &mut impl Write) -> Result<(), CliError> {
    for key in MetadataKey::ALL {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
