//! Default locale detection.

use eventmeta_core::{Locale, ProbeError, ProbeResult};
use tracing::debug;

/// Environment variables consulted for the locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Android system properties consulted for the locale, highest priority first.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub const LOCALE_PROPERTIES: [&str; 2] = ["persist.sys.locale", "ro.product.locale"];

/// First parseable locale among `names`, read through `lookup`.
pub fn locale_from_lookup<F>(names: &[&str], lookup: F) -> ProbeResult<Locale>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find_map(|value| Locale::parse(&value))
        .ok_or_else(|| ProbeError::LocaleQueryFailed(format!("none of {names:?} is set")))
}

/// Process locale from the environment, read through `lookup`.
///
/// POSIX treats an environment without any locale variable as the `C`
/// locale, which has no region.
#[cfg_attr(target_os = "android", allow(dead_code))]
pub fn env_locale_from_lookup<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    locale_from_lookup(&LOCALE_ENV_VARS, lookup).unwrap_or_else(|err| {
        debug!(%err, "Falling back to the C locale");
        Locale::new("c", None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let lookup = |name: &str| match name {
            "LC_MESSAGES" => Some("fr_CA.UTF-8".to_string()),
            "LANG" => Some("en_US.UTF-8".to_string()),
            _ => None,
        };
        let locale = locale_from_lookup(&LOCALE_ENV_VARS, lookup).unwrap();
        assert_eq!(locale.iso3_country(), Some("CAN"));
    }

    #[test]
    fn test_empty_values_skipped() {
        let lookup = |name: &str| match name {
            "LC_ALL" => Some(String::new()),
            "LANG" => Some("ja_JP.UTF-8".to_string()),
            _ => None,
        };
        let locale = locale_from_lookup(&LOCALE_ENV_VARS, lookup).unwrap();
        assert_eq!(locale.language, "ja");
        assert_eq!(locale.iso3_country(), Some("JPN"));
    }

    #[test]
    fn test_android_property_form() {
        let lookup = |name: &str| (name == "ro.product.locale").then(|| "pt-BR".to_string());
        let locale = locale_from_lookup(&LOCALE_PROPERTIES, lookup).unwrap();
        assert_eq!(locale.iso3_country(), Some("BRA"));
    }

    #[test]
    fn test_unset_properties_are_an_error() {
        let err = locale_from_lookup(&LOCALE_PROPERTIES, |_| None).unwrap_err();
        assert!(matches!(err, ProbeError::LocaleQueryFailed(_)));
    }

    #[test]
    fn test_unset_environment_is_the_c_locale() {
        let locale = env_locale_from_lookup(|_| None);
        assert_eq!(locale, Locale::new("c", None));
        assert_eq!(locale.region, None);
        assert_eq!(locale.iso3_country(), None);
    }

    #[test]
    fn test_environment_locale_is_used_when_set() {
        let lookup = |name: &str| (name == "LANG").then(|| "de_DE.UTF-8".to_string());
        let locale = env_locale_from_lookup(lookup);
        assert_eq!(locale.iso3_country(), Some("DEU"));
    }
}
