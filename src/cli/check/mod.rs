//! Site check command.
//!
//! Loads the sidebar declarations, scans the doc store, and verifies that
//! every reference in the two configuration records resolves: sidebar
//! document ids, navbar/footer targets, and (optionally) links written in
//! markdown content. Severity follows the `[markdown]` policies.

mod report;

use std::fs;
use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::CheckArgs;
use crate::config::{BrokenLinkPolicy, ConfigDiagnostics, ConfigError, FieldPath, SiteConfig};
use crate::docs::{DocStore, LinkKind, extract_links};
use crate::log;
use crate::sidebar::Sidebars;
use crate::utils::{plural_count, plural_s};

use report::CheckReport;

/// Check sidebars, navigation targets, and markdown links
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let sidebars = Sidebars::load(&config.site.sidebars)?;

    // Structural checks: these fail regardless of link policy
    let mut diag = ConfigDiagnostics::new();
    sidebars.validate(&mut diag);
    check_sidebar_refs(config, &sidebars, &mut diag);
    diag.print_warnings();
    if let Err(diag) = diag.into_result() {
        bail!(ConfigError::Diagnostics(diag));
    }

    let store = DocStore::scan(&config.site.docs)?;
    log!(
        "check";
        "checking {} against {}",
        plural_count(sidebars.sidebars.len(), "sidebar"),
        plural_count(store.len(), "doc")
    );

    if store.is_empty() {
        log!("check"; "no documents found in {}", config.site.docs.display());
    }

    let mut report = CheckReport::default();

    let ref_policy = effective_policy(config.markdown.on_broken_links, args.warn_only);
    if !ref_policy.is_ignore() {
        check_doc_refs(&sidebars, &store, &mut report);
        check_internal_targets(config, &store, &mut report);
    }

    let md_policy = effective_policy(config.markdown.on_broken_markdown_links, args.warn_only);
    if !args.no_markdown && !md_policy.is_ignore() {
        check_markdown_links(config, &store, &mut report)?;
    }

    // Print detailed findings (references -> markdown links)
    report.print();

    summarize(&report, ref_policy, md_policy)
}

/// Verify navbar `sidebar` targets name declared sidebars.
fn check_sidebar_refs(config: &SiteConfig, sidebars: &Sidebars, diag: &mut ConfigDiagnostics) {
    for (label, id) in config.navbar.sidebar_refs() {
        if sidebars.get(id).is_none() {
            diag.error_with_hint(
                FieldPath::new("navbar.items.sidebar"),
                format!("entry '{}' references unknown sidebar '{}'", label, id),
                format!("declare [[sidebar]] with id = \"{}\"", id),
            );
        }
    }
}

/// Verify every sidebar document reference exists in the doc store.
fn check_doc_refs(sidebars: &Sidebars, store: &DocStore, report: &mut CheckReport) {
    for sidebar in &sidebars.sidebars {
        for doc in sidebar.doc_refs() {
            if !store.contains_id(doc) {
                report.add_ref(
                    format!("sidebar '{}'", sidebar.id),
                    format!("`{}`", doc),
                    "no such document".to_string(),
                );
            }
        }
    }
}

/// Verify navbar/footer `to` targets resolve to doc routes.
fn check_internal_targets(config: &SiteConfig, store: &DocStore, report: &mut CheckReport) {
    let base_url = config.site.info.base_url.as_str();

    for (label, to) in config.navbar.internal_targets() {
        if !resolve_internal(store, base_url, to) {
            report.add_ref(
                "navbar".to_string(),
                format!("`{}` ({})", to, label),
                "no document at this route".to_string(),
            );
        }
    }

    for (label, to) in config.footer.internal_targets() {
        if !resolve_internal(store, base_url, to) {
            report.add_ref(
                "footer".to_string(),
                format!("`{}` ({})", to, label),
                "no document at this route".to_string(),
            );
        }
    }
}

/// Scan markdown content for broken document links.
fn check_markdown_links(
    config: &SiteConfig,
    store: &DocStore,
    report: &mut CheckReport,
) -> Result<()> {
    for file in store.files() {
        let content = fs::read_to_string(file)
            .map_err(|err| ConfigError::Io(file.clone(), err))?;

        let rel = file.strip_prefix(&config.site.docs).unwrap_or(file);
        let source = config
            .root_relative(file)
            .to_string_lossy()
            .replace('\\', "/");

        for link in extract_links(&content) {
            if let Some(reason) = broken_markdown_link(store, config, rel, &link) {
                report.add_markdown(source.clone(), format!("`{}`", link), reason);
            }
        }
    }

    Ok(())
}

/// Check one markdown link destination. Returns a reason if broken.
fn broken_markdown_link(
    store: &DocStore,
    config: &SiteConfig,
    source: &Path,
    link: &str,
) -> Option<String> {
    match LinkKind::parse(link) {
        // External URLs and in-page anchors are out of scope here
        LinkKind::External(_) | LinkKind::Fragment(_) => None,
        LinkKind::SiteRoot(path) => {
            let path = strip_fragment(path);
            if resolve_internal(store, &config.site.info.base_url, path) {
                None
            } else {
                Some("no document at this route".to_string())
            }
        }
        LinkKind::FileRelative(path) => {
            let path = strip_fragment(path);
            if path.is_empty() {
                return None;
            }

            // Only document links are checked; other extensions are assets
            let (path, is_doc_file) = match path.rsplit_once('.') {
                Some((stem, "md" | "mdx")) => (stem, true),
                Some((_, ext)) if !ext.contains('/') => return None,
                _ => (path, false),
            };

            let Some(id) = resolve_relative_id(source, path) else {
                return Some("escapes the docs directory".to_string());
            };

            if store.contains_id(&id)
                || (!is_doc_file && store.contains_route(&format!("/{}", id)))
            {
                None
            } else {
                Some("no such document".to_string())
            }
        }
    }
}

/// Drop `#fragment` and `?query` suffixes from a link path.
fn strip_fragment(path: &str) -> &str {
    path.split(['#', '?']).next().unwrap_or(path)
}

/// Resolve an internal route against the doc store.
///
/// Targets may be written with or without the configured base_url prefix
/// (`/contextual/api/overview` and `/api/overview` both resolve when
/// base_url is `/contextual/`).
fn resolve_internal(store: &DocStore, base_url: &str, to: &str) -> bool {
    let to = strip_fragment(to);
    if store.contains_route(to) {
        return true;
    }

    let prefix = base_url.trim_end_matches('/');
    if !prefix.is_empty()
        && let Some(stripped) = to.strip_prefix(prefix)
        && (stripped.is_empty() || stripped.starts_with('/'))
    {
        let route = if stripped.is_empty() { "/" } else { stripped };
        return store.contains_route(route);
    }

    false
}

/// Resolve a doc-relative path to a document id.
///
/// `source` is the doc file path relative to the docs dir. Returns `None`
/// when `..` segments climb out of the docs directory.
fn resolve_relative_id(source: &Path, path: &str) -> Option<String> {
    let mut segments: Vec<&str> = source
        .parent()
        .map(|dir| {
            dir.to_str()
                .unwrap_or_default()
                .split(['/', '\\'])
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    Some(segments.join("/"))
}

/// Downgrade a `throw` policy to `warn` when --warn-only is set.
fn effective_policy(policy: BrokenLinkPolicy, warn_only: bool) -> BrokenLinkPolicy {
    if warn_only && policy.is_error() {
        BrokenLinkPolicy::Warn
    } else {
        policy
    }
}

/// Log results and fail the run when an error-severity section has findings.
fn summarize(
    report: &CheckReport,
    ref_policy: BrokenLinkPolicy,
    md_policy: BrokenLinkPolicy,
) -> Result<()> {
    let refs = report.ref_count();
    let markdown = report.markdown_count();

    if refs > 0 {
        log!("check"; "found {} broken reference{}", refs, plural_s(refs));
    }
    if markdown > 0 {
        log!("check"; "found {} broken markdown link{}", markdown, plural_s(markdown));
    }

    let failures = (if ref_policy.is_error() { refs } else { 0 })
        + (if md_policy.is_error() { markdown } else { 0 });

    if failures > 0 {
        bail!(
            "check failed: {} broken reference{}",
            failures,
            plural_s(failures)
        );
    }

    log!("check"; "{}", report);
    Ok(())
}

// ============================================================================
// tests
// ============================================================================
