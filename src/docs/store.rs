//! Doc store: the set of authored documents references resolve against.

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Document file extensions recognized during the scan.
const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// The set of authored documents under the docs directory.
///
/// Each document has an id (root-relative path without extension, `/`
/// separated) and a route (`/<id>` with a trailing `index` segment
/// collapsed to its parent). Sidebar references resolve by id; `to`
/// targets and site-root markdown links resolve by route.
#[derive(Debug, Default)]
pub struct DocStore {
    ids: FxHashSet<String>,
    routes: FxHashMap<String, String>,
    files: Vec<PathBuf>,
}

impl DocStore {
    /// Scan a docs directory recursively.
    ///
    /// Collects `.md`/`.mdx` files; files and directories whose name
    /// starts with `_` are treated as partials and skipped.
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("docs directory '{}' not found", dir.display());
        }

        let mut store = Self::default();

        let files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_str().unwrap_or_default();
                !IGNORED_FILES.contains(&name) && !name.starts_with('_')
            })
            .map(|e| e.path())
            .collect();

        for file in files {
            let Some(id) = doc_id(&file, dir) else {
                continue;
            };
            if id.split('/').any(|segment| segment.starts_with('_')) {
                continue;
            }
            store.insert(id);
            store.files.push(file);
        }

        store.files.sort();
        Ok(store)
    }

    /// Register a document id.
    pub fn insert(&mut self, id: String) {
        self.routes.insert(route_for(&id), id.clone());
        self.ids.insert(id);
    }

    /// Check whether a document id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Check whether a site-root route resolves to a document.
    ///
    /// Routes are normalized before lookup: trailing slashes are trimmed
    /// and the empty path means the root route `/`.
    pub fn contains_route(&self, route: &str) -> bool {
        self.routes.contains_key(&normalize_route(route))
    }

    /// Document files discovered by the scan, sorted.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of documents in the store.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Derive a document id from a file path relative to the docs dir.
///
/// Returns `None` for files without a recognized doc extension.
fn doc_id(file: &Path, dir: &Path) -> Option<String> {
    let ext = file.extension()?.to_str()?;
    if !DOC_EXTENSIONS.contains(&ext) {
        return None;
    }

    let rel = file.strip_prefix(dir).ok()?.with_extension("");

    // Join components with '/' so ids are separator-agnostic
    let id = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    (!id.is_empty()).then_some(id)
}

/// Compute the route a document id is served at.
///
/// `index` -> `/`, `foo/index` -> `/foo`, `foo/bar` -> `/foo/bar`
fn route_for(id: &str) -> String {
    if id == "index" {
        return "/".into();
    }
    if let Some(parent) = id.strip_suffix("/index") {
        return format!("/{}", parent);
    }
    format!("/{}", id)
}

/// Normalize a route for lookup: strip trailing slashes, empty means root.
fn normalize_route(route: &str) -> String {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# doc\n").unwrap();
    }

    fn sample_store() -> (tempfile::TempDir, DocStore) {
        let tmp = tempfile::tempdir().unwrap();
        let docs = tmp.path().join("docs");
        write_doc(&docs, "index.md");
        write_doc(&docs, "getting-started.md");
        write_doc(&docs, "usage.md");
        write_doc(&docs, "next-steps.md");
        write_doc(&docs, "api/overview.md");
        write_doc(&docs, "api/drivers/console.mdx");
        write_doc(&docs, "_partials/snippet.md");
        write_doc(&docs, "api/_shared.md");
        fs::write(docs.join("notes.txt"), "not a doc").unwrap();

        let store = DocStore::scan(&docs).unwrap();
        (tmp, store)
    }

    #[test]
    fn test_scan_collects_doc_ids() {
        let (_tmp, store) = sample_store();
        assert_eq!(store.len(), 6);
        assert!(store.contains_id("index"));
        assert!(store.contains_id("getting-started"));
        assert!(store.contains_id("api/overview"));
        assert!(store.contains_id("api/drivers/console"));
    }

    #[test]
    fn test_scan_skips_partials_and_non_docs() {
        let (_tmp, store) = sample_store();
        assert!(!store.contains_id("_partials/snippet"));
        assert!(!store.contains_id("api/_shared"));
        assert!(!store.contains_id("notes"));
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        assert!(DocStore::scan(Path::new("/nonexistent/docs")).is_err());
    }

    #[test]
    fn test_route_resolution() {
        let (_tmp, store) = sample_store();
        assert!(store.contains_route("/"));
        assert!(store.contains_route("/getting-started"));
        assert!(store.contains_route("/api/overview"));
        assert!(store.contains_route("/api/overview/")); // trailing slash
        assert!(!store.contains_route("/missing"));
    }

    #[test]
    fn test_route_for_index_collapse() {
        assert_eq!(route_for("index"), "/");
        assert_eq!(route_for("api/index"), "/api");
        assert_eq!(route_for("api/overview"), "/api/overview");
        // A doc that merely ends in "index" keeps its own route
        assert_eq!(route_for("reindex"), "/reindex");
    }
}
