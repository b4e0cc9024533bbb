//! Event metadata record attached to telemetry events.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys present in every [`EventMetadata`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataKey {
    Os,
    Manufacturer,
    Brand,
    Device,
    Version,
    Abi,
    Gpu,
    Country,
    Ram,
    ScreenSize,
}

impl MetadataKey {
    /// All keys, in the order they are serialized.
    pub const ALL: [Self; 10] = [
        Self::Os,
        Self::Manufacturer,
        Self::Brand,
        Self::Device,
        Self::Version,
        Self::Abi,
        Self::Gpu,
        Self::Country,
        Self::Ram,
        Self::ScreenSize,
    ];

    /// Wire name used in event payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Manufacturer => "manufacturer",
            Self::Brand => "brand",
            Self::Device => "device",
            Self::Version => "version",
            Self::Abi => "abi",
            Self::Gpu => "gpu",
            Self::Country => "country",
            Self::Ram => "ram",
            Self::ScreenSize => "screenSize",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a metadata key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown metadata key: {0}")]
pub struct UnknownKeyError(pub String);

impl FromStr for MetadataKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKeyError(s.to_string()))
    }
}

/// Device and environment facts attached to a telemetry event.
///
/// The record always holds exactly one value per [`MetadataKey`]; there is no
/// way to add or remove keys. Values are plain strings, matching what the
/// event serializer embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMetadata {
    values: [String; 10],
}

impl EventMetadata {
    /// Start building a record. Keys left unset are empty strings.
    pub fn builder() -> EventMetadataBuilder {
        EventMetadataBuilder::default()
    }

    /// Value for `key`.
    pub fn get(&self, key: MetadataKey) -> &str {
        &self.values[key.index()]
    }

    /// Iterate `(key, value)` pairs in [`MetadataKey::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (MetadataKey, &str)> {
        MetadataKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// Number of keys. Always ten.
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        MetadataKey::ALL.len()
    }

    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Flat JSON object with one string member per key.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries()
            .map(|(key, value)| (key.as_str().to_string(), Value::String(value.to_string())))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for EventMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

/// Builder for [`EventMetadata`].
#[derive(Debug, Default, Clone)]
pub struct EventMetadataBuilder {
    values: [String; 10],
}

impl EventMetadataBuilder {
    /// Set the value for `key`, replacing any earlier value.
    #[must_use]
    pub fn set(mut self, key: MetadataKey, value: impl Into<String>) -> Self {
        self.values[key.index()] = value.into();
        self
    }

    pub fn build(self) -> EventMetadata {
        EventMetadata {
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventMetadata {
        EventMetadata::builder()
            .set(MetadataKey::Os, "android")
            .set(MetadataKey::Manufacturer, "Google")
            .set(MetadataKey::Brand, "google")
            .set(MetadataKey::Device, "Pixel 7")
            .set(MetadataKey::Version, "14")
            .set(MetadataKey::Abi, "arm64-v8a")
            .set(MetadataKey::Country, "USA")
            .set(MetadataKey::Ram, "8000000000")
            .set(MetadataKey::ScreenSize, "{1080,2400}")
            .build()
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in MetadataKey::ALL {
            assert_eq!(key.as_str().parse::<MetadataKey>(), Ok(key));
        }
        assert_eq!(MetadataKey::ScreenSize.to_string(), "screenSize");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "screen_size".parse::<MetadataKey>().unwrap_err();
        assert_eq!(err, UnknownKeyError("screen_size".to_string()));
    }

    #[test]
    fn test_unset_keys_are_empty() {
        let meta = EventMetadata::builder().build();
        assert_eq!(meta.len(), 10);
        assert!(meta.entries().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_entries_follow_key_order() {
        let meta = sample();
        let keys: Vec<_> = meta.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, MetadataKey::ALL.to_vec());
        assert_eq!(meta.get(MetadataKey::Device), "Pixel 7");
        assert_eq!(meta.get(MetadataKey::Gpu), "");
    }

    #[test]
    fn test_to_json_has_exactly_ten_string_members() {
        let json = sample().to_json();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 10);
        assert!(obj.values().all(Value::is_string));
        assert_eq!(obj["screenSize"], "{1080,2400}");
        assert_eq!(obj["country"], "USA");
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let meta = sample();
        let serialized = serde_json::to_value(&meta).unwrap();
        assert_eq!(serialized, meta.to_json());

        let text = serde_json::to_string(&meta).unwrap();
        assert!(text.starts_with(r#"{"os":"android","manufacturer":"Google""#));
    }
}
