//! Integration tests for the event metadata cache contract.
//!
//! Uses mockall expectations to check that each platform service is queried
//! exactly once, no matter how often the metadata is read.

use std::sync::Arc;
use std::thread;

use eventmeta_core::{
    BuildInfo, DisplayMetrics, EventMetadataCache, Locale, MemoryInfo, MetadataError, MetadataKey,
    PlatformProbePort, ProbeError, ProbeResult,
};
use mockall::mock;

mock! {
    Probe {}

    impl PlatformProbePort for Probe {
        fn os_name(&self) -> String;
        fn build_info(&self) -> ProbeResult<BuildInfo>;
        fn memory_info(&self) -> ProbeResult<MemoryInfo>;
        fn display_metrics(&self) -> ProbeResult<DisplayMetrics>;
        fn default_locale(&self) -> ProbeResult<Locale>;
    }
}

fn pixel_probe() -> MockProbe {
    let mut probe = MockProbe::new();
    probe
        .expect_os_name()
        .times(1)
        .returning(|| "android".to_string());
    probe.expect_build_info().times(1).returning(|| {
        Ok(BuildInfo {
            manufacturer: "Google".to_string(),
            brand: "google".to_string(),
            model: "Pixel 8".to_string(),
            os_version: "14".to_string(),
            cpu_abi: "arm64-v8a".to_string(),
        })
    });
    probe.expect_memory_info().times(1).returning(|| {
        Ok(MemoryInfo {
            total_bytes: 7_864_320_000,
        })
    });
    probe
        .expect_display_metrics()
        .times(1)
        .returning(|| Ok(DisplayMetrics::new(1080, 2400)));
    probe
        .expect_default_locale()
        .times(1)
        .returning(|| Ok(Locale::new("en", Some("GB".to_string()))));
    probe
}

#[test]
fn test_each_service_queried_once() {
    let cache = Arc::new(EventMetadataCache::new(Arc::new(pixel_probe())));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get().unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.iter().all(|m| Arc::ptr_eq(m, &results[0])));
    assert!(Arc::ptr_eq(&cache.get().unwrap(), &results[0]));
}

#[test]
fn test_record_has_exactly_the_fixed_keys() {
    let cache = EventMetadataCache::new(Arc::new(pixel_probe()));
    let meta = cache.get().unwrap();

    let json = meta.to_json();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    let mut expected: Vec<_> = MetadataKey::ALL
        .iter()
        .map(|k| k.as_str().to_string())
        .collect();
    expected.sort();
    assert_eq!(keys, expected);

    assert_eq!(json["device"], "Pixel 8");
    assert_eq!(json["country"], "GBR");
    assert_eq!(json["ram"], "7864320000");
    assert_eq!(json["screenSize"], "{1080,2400}");
    assert_eq!(json["gpu"], "");
}

#[test]
fn test_memory_failure_propagates() {
    let mut probe = MockProbe::new();
    probe
        .expect_build_info()
        .returning(|| Ok(BuildInfo::default()));
    probe
        .expect_memory_info()
        .returning(|| Err(ProbeError::MemoryQueryFailed("no meminfo".to_string())));

    let cache = EventMetadataCache::new(Arc::new(probe));
    let err = cache.get().unwrap_err();

    assert!(matches!(
        err,
        MetadataError::Probe(ProbeError::MemoryQueryFailed(_))
    ));
    assert_eq!(err.to_string(), "Memory query failed: no meminfo");
    assert!(!cache.is_populated());
}
