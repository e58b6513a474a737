//! `[navbar]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "Contextual"
//! logo = { src = "img/logo.svg", alt = "Contextual logo" }
//!
//! [[navbar.items]]
//! label = "Docs"
//! sidebar = "docs"
//! position = "left"
//!
//! [[navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/kingwill101/contextual"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Top navigation bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Title shown next to the logo. Falls back to the site title when empty.
    pub title: String,

    /// Logo image.
    pub logo: Option<LogoConfig>,

    /// Ordered navbar entries.
    pub items: Vec<NavbarItem>,
}

/// Navbar logo image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image path (relative to site root).
    pub src: PathBuf,

    /// Alt text for the image.
    pub alt: String,
}

/// Horizontal placement of a navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// A single navbar entry.
///
/// Exactly one of `to`, `href`, or `sidebar` must be set:
/// - `to` links to an internal doc route
/// - `href` links to an external URL
/// - `sidebar` links to the first document of a declared sidebar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItem {
    /// Display label.
    pub label: String,

    /// Placement in the bar.
    pub position: NavbarPosition,

    /// Internal route target (e.g., "/api/overview").
    pub to: Option<String>,

    /// External URL target.
    pub href: Option<String>,

    /// Sidebar id target.
    pub sidebar: Option<String>,
}

impl NavbarItem {
    /// Number of target fields set on this entry.
    fn target_count(&self) -> usize {
        [
            self.to.is_some(),
            self.href.is_some(),
            self.sidebar.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

impl NavbarConfig {
    /// Validate navbar structure and targets that need no site context.
    ///
    /// # Checks
    /// - Labels must not be empty
    /// - Each entry sets exactly one of `to` / `href` / `sidebar`
    /// - `href` targets must be well-formed http(s) URLs
    /// - Logo alt text should accompany a logo image
    ///
    /// Whether `to` routes and `sidebar` ids resolve is checked by the
    /// `check` command, which has the doc store and sidebars loaded.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            if logo.src.as_os_str().is_empty() {
                diag.error(FieldPath::new("navbar.logo.src"), "logo src is empty");
            }
            if logo.alt.trim().is_empty() {
                diag.warn(
                    FieldPath::new("navbar.logo.alt"),
                    "logo has no alt text".to_string(),
                );
            }
        }

        for item in &self.items {
            if item.label.trim().is_empty() {
                diag.error(
                    FieldPath::new("navbar.items.label"),
                    "navbar entry has an empty label",
                );
            }

            match item.target_count() {
                1 => {}
                0 => diag.error_with_hint(
                    FieldPath::new("navbar.items"),
                    format!("entry '{}' has no target", item.label),
                    "set one of `to`, `href`, or `sidebar`",
                ),
                _ => diag.error_with_hint(
                    FieldPath::new("navbar.items"),
                    format!("entry '{}' has multiple targets", item.label),
                    "set only one of `to`, `href`, or `sidebar`",
                ),
            }

            if let Some(href) = &item.href {
                super::validate_external_url(href, FieldPath::new("navbar.items.href"), diag);
            }
        }
    }

    /// Internal route targets declared on navbar entries.
    pub fn internal_targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .filter_map(|item| item.to.as_deref().map(|to| (item.label.as_str(), to)))
    }

    /// Sidebar ids referenced by navbar entries.
    pub fn sidebar_refs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .filter_map(|item| item.sidebar.as_deref().map(|id| (item.label.as_str(), id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(navbar: &NavbarConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.navbar.items.is_empty());
        assert!(config.navbar.logo.is_none());
        assert!(!validate(&config.navbar).has_errors());
    }

    #[test]
    fn test_full_navbar() {
        let config = test_parse_config(
            r#"[navbar]
title = "Contextual"
logo = { src = "img/logo.svg", alt = "Contextual logo" }

[[navbar.items]]
label = "Docs"
sidebar = "docs"

[[navbar.items]]
label = "Pub.dev"
href = "https://pub.dev/packages/contextual"
position = "right"

[[navbar.items]]
label = "GitHub"
href = "https://github.com/kingwill101/contextual"
position = "right"
"#,
        );
        assert_eq!(config.navbar.items.len(), 3);
        assert_eq!(config.navbar.items[0].position, NavbarPosition::Left);
        assert_eq!(config.navbar.items[1].position, NavbarPosition::Right);
        assert!(!validate(&config.navbar).has_errors());

        let refs: Vec<_> = config.navbar.sidebar_refs().collect();
        assert_eq!(refs, vec![("Docs", "docs")]);
    }

    #[test]
    fn test_entry_without_target_rejected() {
        let config = test_parse_config("[[navbar.items]]\nlabel = \"Dangling\"");
        assert!(validate(&config.navbar).has_errors());
    }

    #[test]
    fn test_entry_with_two_targets_rejected() {
        let config = test_parse_config(
            "[[navbar.items]]\nlabel = \"Both\"\nto = \"/\"\nhref = \"https://example.com\"",
        );
        assert!(validate(&config.navbar).has_errors());
    }

    #[test]
    fn test_empty_label_rejected() {
        let config = test_parse_config("[[navbar.items]]\nlabel = \"\"\nto = \"/\"");
        assert!(validate(&config.navbar).has_errors());
    }

    #[test]
    fn test_bad_href_rejected() {
        let config =
            test_parse_config("[[navbar.items]]\nlabel = \"Bad\"\nhref = \"ftp://example.com\"");
        assert!(validate(&config.navbar).has_errors());
    }

    #[test]
    fn test_internal_targets() {
        let config = test_parse_config(
            "[[navbar.items]]\nlabel = \"Start\"\nto = \"/getting-started\"",
        );
        let targets: Vec<_> = config.navbar.internal_targets().collect();
        assert_eq!(targets, vec![("Start", "/getting-started")]);
    }
}
