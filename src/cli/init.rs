//! Init command: scaffold starter config, sidebar, and doc files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::log;

const SITE_TOML: &str = r#"[site.info]
title = "My Docs"
tagline = "Documentation for my project"
# url = "https://example.github.io"
# base_url = "/my-project/"

[site.i18n]
default_locale = "en"
locales = ["en"]

[markdown]
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[navbar]
title = "My Docs"

[[navbar.items]]
label = "Docs"
sidebar = "docs"

[footer]
copyright = "Copyright © My Docs contributors."

[[footer.groups]]
title = "Docs"
items = [{ label = "Getting Started", to = "/" }]
"#;

const SIDEBARS_TOML: &str = r#"[[sidebar]]
id = "docs"

[[sidebar.categories]]
label = "Getting Started"
collapsible = false
items = ["index", "getting-started", "usage", "next-steps"]
"#;

/// Starter docs so a fresh site passes `docsite check` immediately.
const STARTER_DOCS: &[(&str, &str)] = &[
    ("index.md", "# Welcome\n\nStart with [getting started](getting-started.md).\n"),
    ("getting-started.md", "# Getting Started\n"),
    ("usage.md", "# Usage\n"),
    ("next-steps.md", "# Next Steps\n"),
];

/// Create a new site skeleton in `name` (or the current directory).
pub fn new_site(name: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let config_path = root.join("site.toml");
    if config_path.exists() {
        bail!("'{}' already exists, refusing to overwrite", config_path.display());
    }

    fs::create_dir_all(root.join("docs"))
        .with_context(|| format!("Failed to create {}", root.join("docs").display()))?;

    write_new(&config_path, SITE_TOML)?;
    write_new(&root.join("sidebars.toml"), SIDEBARS_TOML)?;
    for (file, content) in STARTER_DOCS {
        write_new(&root.join("docs").join(file), content)?;
    }

    log!("init"; "created site skeleton in {}", root.display());
    log!("init"; "run 'docsite check' to verify it");
    Ok(())
}

/// Write a file, never overwriting existing content.
fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        log!("init"; "skipping existing {}", path.display());
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::docs::DocStore;
    use crate::sidebar::Sidebars;

    #[test]
    fn test_starter_config_parses_clean() {
        let (config, ignored) = SiteConfig::parse_with_ignored(SITE_TOML).unwrap();
        assert!(ignored.is_empty(), "starter config has unknown fields: {ignored:?}");
        assert_eq!(config.site.info.title, "My Docs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_starter_sidebars_parse_clean() {
        let sidebars = Sidebars::from_str(SIDEBARS_TOML).unwrap();
        let docs = sidebars.get("docs").unwrap();
        assert_eq!(docs.first_doc(), Some("index"));
    }

    #[test]
    fn test_starter_refs_resolve() {
        // Every sidebar ref must point at a starter doc
        let sidebars = Sidebars::from_str(SIDEBARS_TOML).unwrap();
        let mut store = DocStore::default();
        for (file, _) in STARTER_DOCS {
            store.insert(file.trim_end_matches(".md").to_string());
        }

        for sidebar in &sidebars.sidebars {
            for doc in sidebar.doc_refs() {
                assert!(store.contains_id(doc), "unresolvable starter ref: {doc}");
            }
        }
    }

    #[test]
    fn test_new_site_scaffold() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-docs");

        // Drive write_new directly against the temp root (new_site resolves
        // against cwd, which tests must not change)
        fs::create_dir_all(root.join("docs")).unwrap();
        write_new(&root.join("site.toml"), SITE_TOML).unwrap();
        write_new(&root.join("sidebars.toml"), SIDEBARS_TOML).unwrap();
        for (file, content) in STARTER_DOCS {
            write_new(&root.join("docs").join(file), content).unwrap();
        }

        assert!(root.join("site.toml").exists());
        assert!(root.join("docs/index.md").exists());

        // Re-running must not clobber files
        fs::write(root.join("site.toml"), "custom").unwrap();
        write_new(&root.join("site.toml"), SITE_TOML).unwrap();
        assert_eq!(fs::read_to_string(root.join("site.toml")).unwrap(), "custom");
    }
}
