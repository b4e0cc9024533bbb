//! Metadata settings and validation.
//!
//! Settings carry optional overrides applied on top of probed values. They
//! are pure domain types; reading them from the environment goes through
//! a lookup function so callers decide where values come from.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the `os` value.
pub const ENV_OS_OVERRIDE: &str = "EVENTMETA_OS";

/// Environment variable overriding the `country` value.
pub const ENV_COUNTRY_OVERRIDE: &str = "EVENTMETA_COUNTRY";

/// Overrides for probed metadata values.
///
/// All fields are optional; `None` keeps the probed value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetadataSettings {
    /// Replaces the probed OS name.
    pub os_name: Option<String>,

    /// Replaces the locale-derived country; ISO 3166-1 alpha-3.
    pub country: Option<String>,
}

impl MetadataSettings {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`. Empty or blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            os_name: read(ENV_OS_OVERRIDE),
            country: read(ENV_COUNTRY_OVERRIDE).map(|c| c.to_ascii_uppercase()),
        }
    }

    /// True when no override is set.
    pub const fn is_empty(&self) -> bool {
        self.os_name.is_none() && self.country.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Country override must be an ISO 3166-1 alpha-3 code, got {0:?}")]
    InvalidCountry(String),

    #[error("OS name override cannot be empty")]
    EmptyOsName,
}

/// Validate settings values.
pub fn validate_settings(settings: &MetadataSettings) -> Result<(), SettingsError> {
    if let Some(country) = &settings.country {
        if country.len() != 3 || !country.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(SettingsError::InvalidCountry(country.clone()));
        }
    }

    if settings
        .os_name
        .as_ref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Err(SettingsError::EmptyOsName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_settings_empty() {
        let settings = MetadataSettings::default();
        assert!(settings.is_empty());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let settings = MetadataSettings::from_lookup(lookup_from(&[
            (ENV_OS_OVERRIDE, "android"),
            (ENV_COUNTRY_OVERRIDE, " deu "),
        ]));
        assert_eq!(settings.os_name.as_deref(), Some("android"));
        assert_eq!(settings.country.as_deref(), Some("DEU"));
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let settings = MetadataSettings::from_lookup(lookup_from(&[
            (ENV_OS_OVERRIDE, ""),
            (ENV_COUNTRY_OVERRIDE, "   "),
        ]));
        assert!(settings.is_empty());
    }

    #[test]
    fn test_validate_country_wrong_length() {
        let settings = MetadataSettings {
            country: Some("US".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::InvalidCountry("US".to_string()))
        );
    }

    #[test]
    fn test_validate_country_not_alphabetic() {
        let settings = MetadataSettings {
            country: Some("419".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidCountry(_))
        ));
    }

    #[test]
    fn test_validate_empty_os_name() {
        let settings = MetadataSettings {
            os_name: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyOsName));
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: MetadataSettings = serde_json::from_str(r#"{"country":"FRA"}"#).unwrap();
        assert_eq!(settings.country.as_deref(), Some("FRA"));
        assert_eq!(settings.os_name, None);
    }
}
