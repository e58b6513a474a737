//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! image = "img/social-card.png"
//!
//! [theme.color_mode]
//! default_mode = "light"
//! respect_prefers_color_scheme = true
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! additional_languages = ["dart"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme and display options passed through to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Social card image path (relative to site root).
    pub image: Option<PathBuf>,

    /// Light/dark mode behavior.
    pub color_mode: ColorModeConfig,

    /// Syntax highlighting theme pair and extra languages.
    pub prism: PrismConfig,
}

impl ThemeConfig {
    /// Validate theme settings.
    ///
    /// # Checks
    /// - Prism theme ids must not be empty
    /// - Additional language tags must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prism.theme.trim().is_empty() {
            diag.error(
                FieldPath::new("theme.prism.theme"),
                "light theme id must not be empty",
            );
        }
        if self.prism.dark_theme.trim().is_empty() {
            diag.error(
                FieldPath::new("theme.prism.dark_theme"),
                "dark theme id must not be empty",
            );
        }
        for (i, lang) in self.prism.additional_languages.iter().enumerate() {
            if lang.trim().is_empty() {
                diag.error(
                    FieldPath::new("theme.prism.additional_languages"),
                    format!("language tag at index {} is empty", i),
                );
            }
        }
    }
}

/// Preferred color scheme behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Mode used when the visitor has no stored preference.
    pub default_mode: ColorMode,

    /// Follow the OS-level light/dark preference.
    pub respect_prefers_color_scheme: bool,
}

/// Color mode for the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Syntax highlighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Theme id for light mode.
    pub theme: String,

    /// Theme id for dark mode.
    pub dark_theme: String,

    /// Language tags highlighted beyond the builtin set.
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
            additional_languages: Vec::new(),
        }
    }
}
