//! Platform facts reported by a probe.

use serde::{Deserialize, Serialize};

/// Build and hardware identifiers of the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Hardware manufacturer (e.g., "Samsung").
    pub manufacturer: String,
    /// Consumer-visible brand (e.g., "samsung").
    pub brand: String,
    /// End-user-visible device model (e.g., "SM-G991B").
    pub model: String,
    /// User-visible OS release version (e.g., "14").
    pub os_version: String,
    /// Primary CPU ABI (e.g., "arm64-v8a").
    pub cpu_abi: String,
}

/// Physical memory of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total memory accessible to the kernel, in bytes.
    pub total_bytes: u64,
}

/// Size of the default display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub width_pixels: u32,
    pub height_pixels: u32,
}

impl DisplayMetrics {
    pub const fn new(width_pixels: u32, height_pixels: u32) -> Self {
        Self {
            width_pixels,
            height_pixels,
        }
    }

    /// Screen size in the `{width,height}` form used by event payloads.
    pub fn screen_size(&self) -> String {
        format!("{{{},{}}}", self.width_pixels, self.height_pixels)
    }
}
