//! Sidebar tree items: document references and nested categories.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A labeled group of sidebar items, possibly nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category heading shown in the sidebar.
    pub label: String,

    /// Whether the category can be collapsed in the rendered sidebar.
    pub collapsible: bool,

    /// Ordered children: document references or nested categories.
    pub items: Vec<SidebarItem>,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            label: String::new(),
            collapsible: true,
            items: Vec::new(),
        }
    }
}

/// A single entry in a category.
///
/// Serialized untagged: a bare string is a document reference, a table is
/// a nested category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Reference to an authored document by id (e.g., "api/overview").
    Doc(String),

    /// Nested category.
    Category(Category),
}

impl Category {
    /// Validate labels and emptiness recursively.
    pub(crate) fn validate(&self, sidebar_id: &str, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error(
                FieldPath::new("sidebar.categories.label"),
                format!("category in sidebar '{}' has an empty label", sidebar_id),
            );
        }
        if self.items.is_empty() {
            diag.error(
                FieldPath::new("sidebar.categories.items"),
                format!(
                    "category '{}' in sidebar '{}' has no items",
                    self.label, sidebar_id
                ),
            );
        }

        for item in &self.items {
            match item {
                SidebarItem::Doc(id) => {
                    if id.trim().is_empty() {
                        diag.error(
                            FieldPath::new("sidebar.categories.items"),
                            format!("category '{}' contains an empty document id", self.label),
                        );
                    }
                }
                SidebarItem::Category(nested) => nested.validate(sidebar_id, diag),
            }
        }
    }

    /// Document references under this category, depth-first in render order.
    pub fn doc_refs(&self) -> impl Iterator<Item = &str> {
        let mut refs = Vec::new();
        self.collect_refs(&mut refs);
        refs.into_iter()
    }

    fn collect_refs<'a>(&'a self, refs: &mut Vec<&'a str>) {
        for item in &self.items {
            match item {
                SidebarItem::Doc(id) => refs.push(id),
                SidebarItem::Category(nested) => nested.collect_refs(refs),
            }
        }
    }
}
