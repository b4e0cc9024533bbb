//! Platform probing for telemetry event metadata.
//!
//! Provides [`DefaultPlatformProbe`], the `PlatformProbePort` implementation
//! for Android and desktop Linux, and [`event_metadata`], the process-wide
//! cached snapshot built on top of it.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod system;

use std::sync::{Arc, LazyLock};

use eventmeta_core::{EventMetadata, EventMetadataCache, MetadataResult, MetadataSettings};

// Re-export platform probe implementation
pub use system::DefaultPlatformProbe;

/// Process-wide metadata cache over the default probe.
static EVENT_METADATA: LazyLock<EventMetadataCache> = LazyLock::new(|| {
    EventMetadataCache::new(Arc::new(DefaultPlatformProbe::new()))
        .with_settings(MetadataSettings::from_env())
});

/// Get the event metadata for this process.
///
/// Platform services are queried on the first successful call only; later
/// calls return the same shared record. Overrides are read from
/// `EVENTMETA_OS` and `EVENTMETA_COUNTRY` when the cache is first touched.
pub fn event_metadata() -> MetadataResult<Arc<EventMetadata>> {
    EVENT_METADATA.get()
}

/// Whether the process-wide metadata has been collected.
pub fn event_metadata_ready() -> bool {
    EVENT_METADATA.is_populated()
}
