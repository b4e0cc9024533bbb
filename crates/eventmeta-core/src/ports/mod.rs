//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the
//! platform. They contain no implementation details and use only domain types.

pub mod platform_probe;

use thiserror::Error;

pub use platform_probe::{PlatformProbePort, ProbeError, ProbeResult};

/// Core error type for event metadata collection.
///
/// Adapters map this to their own error types (CLI exit codes, FFI status
/// values).
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A platform query failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Configured overrides are invalid.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}

/// Result type for metadata collection.
pub type MetadataResult<T> = Result<T, MetadataError>;
