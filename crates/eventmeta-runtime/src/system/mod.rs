//! Platform probe implementation for eventmeta-runtime.
//!
//! This module provides the `DefaultPlatformProbe` which implements
//! `PlatformProbePort` from eventmeta-core. It reads Android system
//! properties, sysfs and the process environment, and asks sysinfo for
//! memory totals.

mod build;
mod display;
mod locale;
mod sysfs;

use std::path::{Path, PathBuf};

use eventmeta_core::{
    BuildInfo, DisplayMetrics, Locale, MemoryInfo, PlatformProbePort, ProbeError, ProbeResult,
};
use sysinfo::System;
use tracing::warn;

pub use build::{UNKNOWN, abi_for_arch};
pub use display::{parse_size, parse_wm_size};
pub use locale::{
    LOCALE_ENV_VARS, LOCALE_PROPERTIES, env_locale_from_lookup, locale_from_lookup,
};

/// Default mount point of sysfs.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

/// Default implementation of `PlatformProbePort`.
///
/// Each query hits the platform afresh; caching is the job of
/// `EventMetadataCache`.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use eventmeta_core::EventMetadataCache;
/// use eventmeta_runtime::DefaultPlatformProbe;
///
/// let cache = EventMetadataCache::new(Arc::new(DefaultPlatformProbe::new()));
/// let metadata = cache.get()?;
/// ```
#[derive(Debug, Clone)]
pub struct DefaultPlatformProbe {
    sysfs_root: PathBuf,
}

impl DefaultPlatformProbe {
    /// Create a probe reading the real sysfs.
    pub fn new() -> Self {
        Self::with_sysfs_root(DEFAULT_SYSFS_ROOT)
    }

    /// Create a probe reading sysfs attributes below `root` instead of `/sys`.
    pub fn with_sysfs_root(root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: root.into(),
        }
    }

    pub fn sysfs_root(&self) -> &Path {
        &self.sysfs_root
    }
}

impl Default for DefaultPlatformProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformProbePort for DefaultPlatformProbe {
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }

    #[cfg(target_os = "android")]
    fn build_info(&self) -> ProbeResult<BuildInfo> {
        build::android_build_info()
    }

    #[cfg(not(target_os = "android"))]
    fn build_info(&self) -> ProbeResult<BuildInfo> {
        let os_version = System::os_version().unwrap_or_else(|| {
            warn!("OS version unavailable");
            String::new()
        });
        Ok(build::dmi_build_info(&self.sysfs_root, os_version))
    }

    fn memory_info(&self) -> ProbeResult<MemoryInfo> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total_bytes = sys.total_memory();

        if total_bytes == 0 {
            return Err(ProbeError::MemoryQueryFailed(
                "total memory reported as zero".to_string(),
            ));
        }
        Ok(MemoryInfo { total_bytes })
    }

    fn display_metrics(&self) -> ProbeResult<DisplayMetrics> {
        #[cfg(target_os = "android")]
        {
            if let Some(metrics) = display::wm_display_metrics() {
                return Ok(metrics);
            }
        }

        display::sysfs_display_metrics(&self.sysfs_root).inspect_err(|err| {
            warn!(%err, "Display metrics unavailable");
        })
    }

    #[cfg(target_os = "android")]
    fn default_locale(&self) -> ProbeResult<Locale> {
        let properties = android_system_properties::AndroidSystemProperties::new();
        locale_from_lookup(&LOCALE_PROPERTIES, |name| properties.get(name))
    }

    #[cfg(not(target_os = "android"))]
    fn default_locale(&self) -> ProbeResult<Locale> {
        Ok(env_locale_from_lookup(|name| std::env::var(name).ok()))
    }
}
