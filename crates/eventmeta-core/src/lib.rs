//! Core domain types and ports for telemetry event metadata.
//!
//! `eventmeta-core` defines the [`EventMetadata`] record, the
//! [`PlatformProbePort`] through which platform services are queried, and the
//! [`EventMetadataCache`] that collects the record once per process.
//! Concrete probes live in `eventmeta-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    BuildInfo, DisplayMetrics, EventMetadata, EventMetadataBuilder, Locale, MemoryInfo,
    MetadataKey, UnknownKeyError, iso3_for_alpha2,
};
pub use ports::{
    MetadataError, MetadataResult, PlatformProbePort, ProbeError, ProbeResult,
};
pub use services::EventMetadataCache;
pub use settings::{
    ENV_COUNTRY_OVERRIDE, ENV_OS_OVERRIDE, MetadataSettings, SettingsError, validate_settings,
};

// mockall is only exercised by the integration tests
#[cfg(test)]
use mockall as _;
