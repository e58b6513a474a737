//! `[site]` section configuration.
//!
//! Contains site metadata, locale settings, and the paths the checker
//! resolves documents and sidebars from.
//!
//! # Example
//!
//! ```toml
//! [site]
//! docs = "docs"
//! sidebars = "sidebars.toml"
//!
//! [site.info]
//! title = "Contextual"
//! tagline = "Structured, typed, ergonomic logging for Dart"
//! url = "https://kingwill101.github.io"
//! base_url = "/contextual/"
//!
//! [site.i18n]
//! default_locale = "en"
//! locales = ["en"]
//! ```

mod i18n;
mod info;

pub use i18n::I18nConfig;
pub use info::SiteInfoConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site section configuration containing metadata, locales, and source paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, tagline, url, etc.)
    pub info: SiteInfoConfig,

    /// Locale settings.
    pub i18n: I18nConfig,

    /// Docs directory holding authored content files (relative to site root).
    pub docs: PathBuf,

    /// Sidebar declaration file (relative to site root).
    pub sidebars: PathBuf,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            info: SiteInfoConfig::default(),
            i18n: I18nConfig::default(),
            docs: PathBuf::from("docs"),
            sidebars: PathBuf::from("sidebars.toml"),
        }
    }
}
