//! Get command handler.

use std::io::Write;

use eventmeta_core::{EventMetadata, MetadataKey};

use crate::error::CliError;

/// Parse a key given on the command line.
pub fn parse_key(raw: &str) -> Result<MetadataKey, CliError> {
    raw.parse().map_err(|_| {
        let valid: Vec<_> = MetadataKey::ALL.iter().map(|k| k.as_str()).collect();
        CliError::Arguments(format!(
            "unknown key {raw:?}, expected one of: {}",
            valid.join(", ")
        ))
    })
}

/// Write the value for `key`, followed by a newline.
pub fn execute(
    metadata: &EventMetadata,
    key: MetadataKey,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", metadata.get(key))?;
    Ok(())
}
