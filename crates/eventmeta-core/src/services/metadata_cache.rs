//! Cached event metadata service.
//!
//! The cache queries the platform probe once and hands out the same shared
//! record for the rest of the process lifetime.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug, warn};

use crate::domain::{EventMetadata, MetadataKey};
use crate::ports::{MetadataResult, PlatformProbePort};
use crate::settings::{MetadataSettings, validate_settings};

/// Read-once, cache-once holder of the device's [`EventMetadata`].
///
/// The first successful [`get`](Self::get) populates the cache under a
/// mutex so concurrent first callers trigger a single collection. A failed
/// collection caches nothing and the next call tries again.
pub struct EventMetadataCache {
    /// Platform services queried on first use.
    probe: Arc<dyn PlatformProbePort>,
    /// Overrides applied on top of probed values.
    settings: MetadataSettings,
    /// Serializes first-time population.
    init_lock: Mutex<()>,
    metadata: OnceLock<Arc<EventMetadata>>,
}

impl EventMetadataCache {
    /// Create an empty cache over `probe`.
    pub fn new(probe: Arc<dyn PlatformProbePort>) -> Self {
        Self {
            probe,
            settings: MetadataSettings::default(),
            init_lock: Mutex::new(()),
            metadata: OnceLock::new(),
        }
    }

    /// Attach value overrides.
    #[must_use]
    pub fn with_settings(mut self, settings: MetadataSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the event metadata, collecting it on first use.
    ///
    /// Every successful call returns the same `Arc`.
    pub fn get(&self) -> MetadataResult<Arc<EventMetadata>> {
        if let Some(metadata) = self.metadata.get() {
            return Ok(Arc::clone(metadata));
        }

        // The guarded state lives in the OnceLock, so a poisoned lock is safe to reuse.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(metadata) = self.metadata.get() {
            return Ok(Arc::clone(metadata));
        }

        let metadata = Arc::new(self.collect()?);
        let metadata = self.metadata.get_or_init(|| metadata);
        Ok(Arc::clone(metadata))
    }

    /// Whether metadata has been collected.
    pub fn is_populated(&self) -> bool {
        self.metadata.get().is_some()
    }

    fn collect(&self) -> MetadataResult<EventMetadata> {
        validate_settings(&self.settings)?;
        debug!("Collecting event metadata");

        let build = self.probe.build_info()?;
        let memory = self.probe.memory_info()?;
        let display = self.probe.display_metrics()?;

        let os = self
            .settings
            .os_name
            .clone()
            .unwrap_or_else(|| self.probe.os_name());

        let country = match &self.settings.country {
            Some(country) => country.clone(),
            None => self.probed_country()?,
        };

        let metadata = EventMetadata::builder()
            .set(MetadataKey::Os, os)
            .set(MetadataKey::Manufacturer, build.manufacturer)
            .set(MetadataKey::Brand, build.brand)
            .set(MetadataKey::Device, build.model)
            .set(MetadataKey::Version, build.os_version)
            .set(MetadataKey::Abi, build.cpu_abi)
            // GPU is not probed; the value stays empty.
            .set(MetadataKey::Gpu, "")
            .set(MetadataKey::Country, country)
            .set(MetadataKey::Ram, memory.total_bytes.to_string())
            .set(MetadataKey::ScreenSize, display.screen_size())
            .build();

        debug!(keys = metadata.len(), "Event metadata collected");
        Ok(metadata)
    }

    fn probed_country(&self) -> MetadataResult<String> {
        let locale = self.probe.default_locale()?;
        let Some(region) = locale.region.as_deref() else {
            return Ok(String::new());
        };

        match locale.iso3_country() {
            Some(iso3) => Ok(iso3.to_string()),
            None => {
                warn!(region, "No ISO 3166 alpha-3 code for locale region");
                Ok(String::new())
            }
        }
    }
}
