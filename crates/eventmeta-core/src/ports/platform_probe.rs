//! Platform probe port for device identification.
//!
//! This port abstracts the platform services queried when building event
//! metadata (build properties, memory, display, locale) from the core
//! domain. Implementations live in adapters (e.g., eventmeta-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (system properties, sysfs, sysinfo)
//! - Tests inject their own probe through `EventMetadataCache::new`

use crate::domain::{BuildInfo, DisplayMetrics, Locale, MemoryInfo};
use thiserror::Error;

/// Errors that can occur during platform probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A build or system property could not be read.
    #[error("Property unavailable: {0}")]
    PropertyUnavailable(String),

    /// System memory query failed.
    #[error("Memory query failed: {0}")]
    MemoryQueryFailed(String),

    /// Display metrics query failed.
    #[error("Display query failed: {0}")]
    DisplayQueryFailed(String),

    /// Default locale could not be determined.
    #[error("Locale query failed: {0}")]
    LocaleQueryFailed(String),
}

/// Result type for platform probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Port for querying the platform services that describe the device.
///
/// # Example
///
/// ```ignore
/// use eventmeta_core::ports::PlatformProbePort;
///
/// fn describe(probe: &dyn PlatformProbePort) {
///     let build = probe.build_info()?;
///     let memory = probe.memory_info()?;
///     // ...
/// }
/// ```
pub trait PlatformProbePort: Send + Sync {
    /// Name of the operating system (e.g., "android").
    fn os_name(&self) -> String;

    /// Hardware identifiers and OS release of the device.
    fn build_info(&self) -> ProbeResult<BuildInfo>;

    /// Total physical memory.
    fn memory_info(&self) -> ProbeResult<MemoryInfo>;

    /// Pixel size of the default display.
    fn display_metrics(&self) -> ProbeResult<DisplayMetrics>;

    /// Default locale of the process.
    fn default_locale(&self) -> ProbeResult<Locale>;
}
