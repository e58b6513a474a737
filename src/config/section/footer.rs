//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//! copyright = "Copyright © Contextual contributors."
//!
//! [[footer.groups]]
//! title = "Docs"
//! items = [
//!     { label = "Getting Started", to = "/" },
//!     { label = "API Overview", to = "/api/overview" },
//! ]
//!
//! [[footer.groups]]
//! title = "Community"
//! items = [
//!     { label = "GitHub Issues", href = "https://github.com/kingwill101/contextual/issues" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Footer style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// Footer configuration: styled link groups plus a copyright line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer style variant.
    pub style: FooterStyle,

    /// Copyright notice.
    pub copyright: String,

    /// Ordered link groups.
    pub groups: Vec<FooterGroup>,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterGroup {
    /// Group heading.
    pub title: String,

    /// Ordered links in the group.
    pub items: Vec<FooterLink>,
}

/// A single footer link.
///
/// Exactly one of `to` (internal route) or `href` (external URL) must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    /// Display label.
    pub label: String,

    /// Internal route target (e.g., "/advanced/type-formatters").
    pub to: Option<String>,

    /// External URL target.
    pub href: Option<String>,
}

impl FooterConfig {
    /// Validate footer structure and targets that need no site context.
    ///
    /// # Checks
    /// - Group titles and link labels must not be empty
    /// - Each link sets exactly one of `to` / `href`
    /// - `href` targets must be well-formed http(s) URLs
    /// - Empty groups are reported as warnings
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for group in &self.groups {
            if group.title.trim().is_empty() {
                diag.error(
                    FieldPath::new("footer.groups.title"),
                    "footer group has an empty title",
                );
            }
            if group.items.is_empty() {
                diag.warn(
                    FieldPath::new("footer.groups"),
                    format!("group '{}' has no links", group.title),
                );
            }

            for link in &group.items {
                if link.label.trim().is_empty() {
                    diag.error(
                        FieldPath::new("footer.groups.items.label"),
                        format!("link in group '{}' has an empty label", group.title),
                    );
                }

                match (&link.to, &link.href) {
                    (Some(_), None) | (None, Some(_)) => {}
                    (None, None) => diag.error_with_hint(
                        FieldPath::new("footer.groups.items"),
                        format!("link '{}' has no target", link.label),
                        "set either `to` or `href`",
                    ),
                    (Some(_), Some(_)) => diag.error_with_hint(
                        FieldPath::new("footer.groups.items"),
                        format!("link '{}' has both `to` and `href`", link.label),
                        "set only one of `to` or `href`",
                    ),
                }

                if let Some(href) = &link.href {
                    super::validate_external_url(
                        href,
                        FieldPath::new("footer.groups.items.href"),
                        diag,
                    );
                }
            }
        }
    }

    /// Internal route targets declared on footer links, with their labels.
    pub fn internal_targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|group| {
            group
                .items
                .iter()
                .filter_map(|link| link.to.as_deref().map(|to| (link.label.as_str(), to)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(footer: &FooterConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.footer.style, FooterStyle::Light);
        assert!(config.footer.groups.is_empty());
        assert!(!validate(&config.footer).has_errors());
    }

    #[test]
    fn test_full_footer() {
        let config = test_parse_config(
            r#"[footer]
style = "dark"
copyright = "Copyright © Contextual contributors."

[[footer.groups]]
title = "Docs"
items = [
    { label = "Getting Started", to = "/" },
    { label = "API Overview", to = "/api/overview" },
]

[[footer.groups]]
title = "Community"
items = [
    { label = "Pub.dev", href = "https://pub.dev/packages/contextual" },
    { label = "GitHub Issues", href = "https://github.com/kingwill101/contextual/issues" },
]
"#,
        );
        assert_eq!(config.footer.style, FooterStyle::Dark);
        assert_eq!(config.footer.groups.len(), 2);
        assert!(!validate(&config.footer).has_errors());

        let targets: Vec<_> = config.footer.internal_targets().collect();
        assert_eq!(
            targets,
            vec![("Getting Started", "/"), ("API Overview", "/api/overview")]
        );
    }

    #[test]
    fn test_link_without_target_rejected() {
        let config = test_parse_config(
            "[[footer.groups]]\ntitle = \"More\"\nitems = [{ label = \"Dangling\" }]",
        );
        assert!(validate(&config.footer).has_errors());
    }

    #[test]
    fn test_link_with_both_targets_rejected() {
        let config = test_parse_config(
            "[[footer.groups]]\ntitle = \"More\"\nitems = [{ label = \"Both\", to = \"/\", href = \"https://example.com\" }]",
        );
        assert!(validate(&config.footer).has_errors());
    }

    #[test]
    fn test_empty_group_warns() {
        let config = test_parse_config("[[footer.groups]]\ntitle = \"More\"\nitems = []");
        let diag = validate(&config.footer);
        assert!(!diag.has_errors());
        assert!(diag.has_warnings());
    }

    #[test]
    fn test_empty_group_title_rejected() {
        let config = test_parse_config(
            "[[footer.groups]]\ntitle = \"\"\nitems = [{ label = \"X\", to = \"/\" }]",
        );
        assert!(validate(&config.footer).has_errors());
    }
}
