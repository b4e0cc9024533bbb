//! Display metrics detection.
//!
//! Connected DRM connectors report their preferred mode first in `modes`.
//! Framebuffer devices list their visible mode in `modes` (`U:1080x2400p-60`);
//! `virtual_size` includes buffering and is read only when `modes` is absent.
//! On Android the window manager's `wm size` is tried before either.

use std::fs;
use std::path::Path;

use eventmeta_core::{DisplayMetrics, ProbeError, ProbeResult};
use tracing::debug;

use super::sysfs::read_trimmed;

/// Detect the default display's size from sysfs under `sysfs_root`.
pub fn sysfs_display_metrics(sysfs_root: &Path) -> ProbeResult<DisplayMetrics> {
    if let Some(metrics) = drm_display_metrics(sysfs_root) {
        return Ok(metrics);
    }

    if let Some(metrics) = framebuffer_display_metrics(&sysfs_root.join("class/graphics/fb0")) {
        return Ok(metrics);
    }

    Err(ProbeError::DisplayQueryFailed(format!(
        "no connected display under {}",
        sysfs_root.display()
    )))
}

/// Connector types wired to a built-in panel.
const INTERNAL_CONNECTORS: [&str; 3] = ["eDP", "LVDS", "DSI"];

/// Preferred mode of the first connected DRM connector.
///
/// Built-in panels come before external outputs, then connectors are taken
/// in name order.
fn drm_display_metrics(sysfs_root: &Path) -> Option<DisplayMetrics> {
    let entries = fs::read_dir(sysfs_root.join("class/drm")).ok()?;
    let mut connectors: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| read_trimmed(&path.join("status")).as_deref() == Some("connected"))
        .collect();
    connectors.sort_by_key(|path| (!is_internal_connector(path), path.clone()));

    connectors.iter().find_map(|path| {
        let modes = read_trimmed(&path.join("modes"))?;
        let metrics = parse_size(modes.lines().next()?, 'x')?;
        debug!(connector = %path.display(), "Display size read from DRM connector");
        Some(metrics)
    })
}

/// Whether a connector directory such as `card0-eDP-1` drives a built-in panel.
fn is_internal_connector(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split_once('-'))
        .is_some_and(|(_, connector)| {
            INTERNAL_CONNECTORS.iter().any(|kind| {
                connector
                    .strip_prefix(kind)
                    .is_some_and(|rest| rest.starts_with('-'))
            })
        })
}

/// Visible framebuffer size from `modes`, else from `virtual_size`.
fn framebuffer_display_metrics(fb: &Path) -> Option<DisplayMetrics> {
    if let Some(modes) = read_trimmed(&fb.join("modes")) {
        let mode = modes.lines().next()?;
        // Mode lines carry a type prefix such as `U:` or `S:`.
        let mode = mode.split_once(':').map_or(mode, |(_, size)| size);
        let metrics = parse_size(mode, 'x')?;
        debug!("Display size read from framebuffer mode");
        return Some(metrics);
    }

    let metrics = parse_size(&read_trimmed(&fb.join("virtual_size"))?, ',')?;
    debug!("Display size read from framebuffer virtual size");
    Some(metrics)
}

/// Parse `"<width><sep><height>"`, ignoring a mode suffix such as `i` or `p-60`.
pub fn parse_size(raw: &str, sep: char) -> Option<DisplayMetrics> {
    let (width, height) = raw.trim().split_once(sep)?;
    let height = height.trim_start();
    let digits = height
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(height.len());
    Some(DisplayMetrics::new(
        width.trim().parse().ok()?,
        height[..digits].parse().ok()?,
    ))
}

/// Parse `wm size` output, preferring an override size over the physical one.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub fn parse_wm_size(output: &str) -> Option<DisplayMetrics> {
    let size_for = |label: &str| {
        output
            .lines()
            .find_map(|line| line.trim().strip_prefix(label))
            .and_then(|rest| parse_size(rest, 'x'))
    };
    size_for("Override size:").or_else(|| size_for("Physical size:"))
}

#[cfg(target_os = "android")]
pub fn wm_display_metrics() -> Option<DisplayMetrics> {
    let output = std::process::Command::new("wm").arg("size").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_wm_size(&String::from_utf8_lossy(&output.stdout))
}
