//! `[site.info]` configuration.
//!
//! Contains basic site information like title, tagline, deployment URL, etc.
//! These values are read once by the generator at build time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata consumed by the generator for page titles, social cards,
/// and deployment URLs. For custom fields, use `[site.info.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Short tagline shown on the landing page and in metadata.
    pub tagline: String,

    /// Site origin (e.g., "https://kingwill101.github.io").
    pub url: Option<String>,

    /// Path prefix the site is served under (e.g., "/contextual/").
    pub base_url: String,

    /// Hosting organization or user name.
    pub organization: String,

    /// Hosted project name.
    pub project: String,

    /// Favicon path (relative to site root).
    pub favicon: Option<PathBuf>,

    /// Custom fields passed through to the generator unchanged.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            organization: String::new(),
            project: String::new(),
            favicon: None,
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - `base_url` must begin and end with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("site.info.title"),
                "title must not be empty",
                "set a site title, e.g.: \"Contextual\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            super::super::validate_external_url(url_str, FieldPath::new("site.info.url"), diag);
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                FieldPath::new("site.info.base_url"),
                format!("'{}' must begin and end with '/'", self.base_url),
                "use format like \"/\" or \"/contextual/\"",
            );
        }

        // A path embedded in the origin url should agree with base_url,
        // otherwise generated links point at the wrong prefix.
        if let Some(url_str) = &self.url
            && let Some(path) = crate::config::util::extract_url_path(url_str)
            && !path.is_empty()
            && self.base_url.trim_matches('/') != path
        {
            diag.warn(
                FieldPath::new("site.info.base_url"),
                format!(
                    "'{}' does not match the path '/{}/' embedded in site.info.url",
                    self.base_url, path
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.base_url, "/");
        assert!(config.site.info.url.is_none());
        assert!(config.site.info.favicon.is_none());
        assert!(config.site.info.extra.is_empty());
    }

    #[test]
    fn test_info_fields() {
        let config = test_parse_config(
            r#"url = "https://kingwill101.github.io"
base_url = "/contextual/"
organization = "kingwill101"
project = "contextual"
favicon = "img/favicon.ico""#,
        );
        assert_eq!(
            config.site.info.url.as_deref(),
            Some("https://kingwill101.github.io")
        );
        assert_eq!(config.site.info.base_url, "/contextual/");
        assert_eq!(config.site.info.organization, "kingwill101");
        assert_eq!(config.site.info.project, "contextual");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = test_parse_config("");
        config.site.info.title = String::new();

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_base_url_must_be_slash_wrapped() {
        let mut config = test_parse_config("");
        config.site.info.base_url = "contextual".into();

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_base_url_mismatch_warns() {
        let mut config = test_parse_config("");
        config.site.info.url = Some("https://kingwill101.github.io/contextual".into());
        config.site.info.base_url = "/".into();

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.has_warnings());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = test_parse_config("");
        config.site.info.url = Some("not-a-url".into());

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
