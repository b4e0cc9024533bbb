//! Build and hardware identifiers.
//!
//! Android devices report these through system properties. Elsewhere the
//! DMI tables exposed in sysfs stand in for them.

use std::path::Path;

use eventmeta_core::BuildInfo;
use tracing::debug;

use super::sysfs::read_trimmed;

/// Placeholder for identifiers the platform does not expose.
pub const UNKNOWN: &str = "unknown";

/// Android ABI name for a Rust target architecture.
pub fn abi_for_arch(arch: &str) -> &str {
    match arch {
        "aarch64" => "arm64-v8a",
        "arm" => "armeabi-v7a",
        "x86" => "x86",
        "x86_64" => "x86_64",
        "riscv64" => "riscv64",
        other => other,
    }
}

/// Read build identifiers from the DMI tables under `sysfs_root`.
///
/// Missing entries become [`UNKNOWN`]; `os_version` is passed in since it
/// does not come from DMI.
#[cfg_attr(target_os = "android", allow(dead_code))]
pub fn dmi_build_info(sysfs_root: &Path, os_version: String) -> BuildInfo {
    let dmi = sysfs_root.join("class/dmi/id");
    let read = |name: &str| {
        read_trimmed(&dmi.join(name)).unwrap_or_else(|| {
            debug!(entry = name, "DMI entry unavailable");
            UNKNOWN.to_string()
        })
    };

    BuildInfo {
        manufacturer: read("sys_vendor"),
        brand: read("board_vendor"),
        model: read("product_name"),
        os_version,
        cpu_abi: abi_for_arch(std::env::consts::ARCH).to_string(),
    }
}

#[cfg(target_os = "android")]
pub fn android_build_info() -> eventmeta_core::ProbeResult<BuildInfo> {
    use android_system_properties::AndroidSystemProperties;
    use eventmeta_core::ProbeError;

    let properties = AndroidSystemProperties::new();
    let get = |name: &str| {
        properties
            .get(name)
            .ok_or_else(|| ProbeError::PropertyUnavailable(name.to_string()))
    };

    Ok(BuildInfo {
        manufacturer: get("ro.product.manufacturer")?,
        brand: get("ro.product.brand")?,
        model: get("ro.product.model")?,
        os_version: get("ro.build.version.release")?,
        cpu_abi: get("ro.product.cpu.abi")?,
    })
}
