//! Small helpers for reading sysfs attribute files.

use std::fs;
use std::path::Path;

/// Read a sysfs attribute, trimmed. Missing, unreadable and blank files give `None`.
pub fn read_trimmed(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
