//! `[site.i18n]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site.i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Locale configuration for the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale the site is authored in.
    pub default_locale: String,

    /// All locales the site is published in, in display order.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    /// Validate locale settings.
    ///
    /// # Checks
    /// - `locales` must not be empty and must not contain duplicates
    /// - `default_locale` must be a member of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                FieldPath::new("site.i18n.locales"),
                "locale list must not be empty",
                "declare at least one locale, e.g.: [\"en\"]",
            );
            return;
        }

        for (i, locale) in self.locales.iter().enumerate() {
            if locale.trim().is_empty() {
                diag.error(
                    FieldPath::new("site.i18n.locales"),
                    format!("locale at index {} is empty", i),
                );
            }
            if self.locales[..i].contains(locale) {
                diag.error(
                    FieldPath::new("site.i18n.locales"),
                    format!("duplicate locale '{}'", locale),
                );
            }
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                FieldPath::new("site.i18n.default_locale"),
                format!(
                    "default locale '{}' is not in the locale list",
                    self.default_locale
                ),
                format!("add '{}' to site.i18n.locales", self.default_locale),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(i18n: &I18nConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        i18n.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.i18n.default_locale, "en");
        assert_eq!(config.site.i18n.locales, vec!["en".to_string()]);
        assert!(!validate(&config.site.i18n).has_errors());
    }

    #[test]
    fn test_default_locale_must_be_declared() {
        let config = test_parse_config(
            "[site.i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\", \"zh-Hans\"]",
        );
        assert!(validate(&config.site.i18n).has_errors());
    }

    #[test]
    fn test_multiple_locales() {
        let config = test_parse_config(
            "[site.i18n]\ndefault_locale = \"en\"\nlocales = [\"en\", \"zh-Hans\"]",
        );
        assert!(!validate(&config.site.i18n).has_errors());
    }

    #[test]
    fn test_empty_locales_rejected() {
        let config = test_parse_config("[site.i18n]\nlocales = []");
        assert!(validate(&config.site.i18n).has_errors());
    }

    #[test]
    fn test_duplicate_locales_rejected() {
        let config = test_parse_config("[site.i18n]\nlocales = [\"en\", \"en\"]");
        assert!(validate(&config.site.i18n).has_errors());
    }
}
