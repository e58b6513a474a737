//! Sidebar navigation trees for `sidebars.toml`.
//!
//! A sidebar is an ordered tree of document references grouped into
//! categories. The generator renders one sidebar per docs area; entries
//! resolve against the doc store at check time.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! id = "docs"
//!
//! [[sidebar.categories]]
//! label = "Getting Started"
//! collapsible = false
//! items = ["index", "getting-started", "usage", "next-steps"]
//!
//! [[sidebar.categories]]
//! label = "API"
//! items = [
//!     "api/overview",
//!     { label = "Drivers", items = ["api/drivers/console", "api/drivers/stack"] },
//! ]
//! ```

mod item;

pub use item::{Category, SidebarItem};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::log;

/// All sidebars declared for the site, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sidebars {
    #[serde(rename = "sidebar")]
    pub sidebars: Vec<Sidebar>,
}

/// A single named sidebar: an ordered sequence of top-level categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sidebar {
    /// Identifier navbar entries reference via `sidebar = "<id>"`.
    pub id: String,

    /// Ordered top-level categories.
    pub categories: Vec<Category>,
}

impl Sidebars {
    /// Load sidebar declarations from file with unknown field detection.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (sidebars, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {}", field);
            }
        }

        Ok(sidebars)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let sidebars = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((sidebars, ignored))
    }

    /// Look up a sidebar by id.
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.id == id)
    }

    /// Validate sidebar structure.
    ///
    /// # Checks
    /// - At least one sidebar is declared
    /// - Sidebar ids are non-empty and unique
    /// - Category labels are non-empty, categories are non-empty
    /// - No duplicate document references within one sidebar
    ///
    /// Whether document references resolve is checked against the doc
    /// store by the `check` command.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sidebars.is_empty() {
            diag.error_with_hint(
                FieldPath::new("sidebar"),
                "no sidebars declared",
                "declare at least one [[sidebar]] with an id",
            );
            return;
        }

        for (i, sidebar) in self.sidebars.iter().enumerate() {
            if sidebar.id.trim().is_empty() {
                diag.error(
                    FieldPath::new("sidebar.id"),
                    format!("sidebar at index {} has an empty id", i),
                );
            }
            if self.sidebars[..i].iter().any(|s| s.id == sidebar.id) {
                diag.error(
                    FieldPath::new("sidebar.id"),
                    format!("duplicate sidebar id '{}'", sidebar.id),
                );
            }

            sidebar.validate(diag);
        }
    }

    /// Parse sidebars from TOML string, failing on any structural error.
    pub fn from_str(content: &str) -> Result<Self> {
        let (sidebars, _) = Self::parse_with_ignored(content)?;
        let mut diag = ConfigDiagnostics::new();
        sidebars.validate(&mut diag);
        if let Err(diag) = diag.into_result() {
            bail!(ConfigError::Diagnostics(diag));
        }
        Ok(sidebars)
    }
}

impl Sidebar {
    /// Validate category structure and duplicate references.
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.categories.is_empty() {
            diag.error(
                FieldPath::new("sidebar.categories"),
                format!("sidebar '{}' has no categories", self.id),
            );
        }

        for category in &self.categories {
            category.validate(&self.id, diag);
        }

        // Duplicate refs render the same doc twice in one sidebar
        let refs: Vec<&str> = self.doc_refs().collect();
        for (i, doc) in refs.iter().enumerate() {
            if refs[..i].contains(doc) {
                diag.warn(
                    FieldPath::new("sidebar.categories.items"),
                    format!("sidebar '{}' references '{}' more than once", self.id, doc),
                );
            }
        }
    }

    /// All document references in this sidebar, in render order.
    pub fn doc_refs(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().flat_map(Category::doc_refs)
    }

    /// The first document reference, used as the landing target for
    /// navbar entries that point at this sidebar.
    pub fn first_doc(&self) -> Option<&str> {
        self.doc_refs().next()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse sidebars, panicking on unknown fields (catches typos in tests).
    fn test_parse(content: &str) -> Sidebars {
        let (parsed, ignored) = Sidebars::parse_with_ignored(content).unwrap();
        assert!(
            ignored.is_empty(),
            "test sidebars have unknown fields: {:?}",
            ignored
        );
        parsed
    }

    fn validate(sidebars: &Sidebars) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        sidebars.validate(&mut diag);
        diag
    }

    const DOCS_SIDEBAR: &str = r#"
[[sidebar]]
id = "docs"

[[sidebar.categories]]
label = "Getting Started"
collapsible = false
items = ["index", "getting-started", "usage", "next-steps"]

[[sidebar.categories]]
label = "API"
items = [
    "api/overview",
    { label = "Drivers", items = [
        "api/drivers/configuration",
        "api/drivers/console",
        "api/drivers/daily-file",
        "api/drivers/webhook",
        "api/drivers/stack",
        "api/drivers/sampling",
    ] },
]

[[sidebar.categories]]
label = "Migration"
items = ["migration/v2"]
"#;

    #[test]
    fn test_parse_nested_sidebar() {
        let sidebars = test_parse(DOCS_SIDEBAR);
        assert_eq!(sidebars.sidebars.len(), 1);

        let docs = sidebars.get("docs").unwrap();
        assert_eq!(docs.categories.len(), 3);
        assert_eq!(docs.categories[0].label, "Getting Started");
        assert!(!docs.categories[0].collapsible);
        assert!(docs.categories[1].collapsible); // default

        // Order is preserved depth-first
        let refs: Vec<_> = docs.doc_refs().collect();
        assert_eq!(refs[0], "index");
        assert_eq!(refs[4], "api/overview");
        assert_eq!(refs[5], "api/drivers/configuration");
        assert_eq!(*refs.last().unwrap(), "migration/v2");
        assert_eq!(refs.len(), 12);
    }

    #[test]
    fn test_first_doc() {
        let sidebars = test_parse(DOCS_SIDEBAR);
        assert_eq!(sidebars.get("docs").unwrap().first_doc(), Some("index"));
    }

    #[test]
    fn test_valid_sidebar_passes() {
        let sidebars = test_parse(DOCS_SIDEBAR);
        let diag = validate(&sidebars);
        assert!(!diag.has_errors());
        assert!(!diag.has_warnings());
    }

    #[test]
    fn test_no_sidebars_rejected() {
        let sidebars = test_parse("");
        assert!(validate(&sidebars).has_errors());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let sidebars = test_parse(
            r#"
[[sidebar]]
id = "docs"
[[sidebar.categories]]
label = "A"
items = ["index"]

[[sidebar]]
id = "docs"
[[sidebar.categories]]
label = "B"
items = ["usage"]
"#,
        );
        assert!(validate(&sidebars).has_errors());
    }

    #[test]
    fn test_empty_category_rejected() {
        let sidebars = test_parse(
            "[[sidebar]]\nid = \"docs\"\n[[sidebar.categories]]\nlabel = \"Empty\"\nitems = []",
        );
        assert!(validate(&sidebars).has_errors());
    }

    #[test]
    fn test_empty_label_rejected() {
        let sidebars = test_parse(
            "[[sidebar]]\nid = \"docs\"\n[[sidebar.categories]]\nlabel = \"\"\nitems = [\"index\"]",
        );
        assert!(validate(&sidebars).has_errors());
    }

    #[test]
    fn test_duplicate_doc_ref_warns() {
        let sidebars = test_parse(
            r#"
[[sidebar]]
id = "docs"
[[sidebar.categories]]
label = "A"
items = ["index", "index"]
"#,
        );
        let diag = validate(&sidebars);
        assert!(!diag.has_errors());
        assert!(diag.has_warnings());
    }

    #[test]
    fn test_from_str_rejects_invalid() {
        assert!(Sidebars::from_str("[[sidebar]]\nid = \"docs\"\ncategories = []").is_err());
    }
}
