//! Markdown link extraction and classification.

use pulldown_cmark::{Event, Parser, Tag};

/// Syntactic kind of a link destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/api/overview).
    SiteRoot(&'a str),
    /// File-relative path (./usage.md, ../advanced/middleware.md).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }
}

/// Check whether a link carries a URL scheme (https:, mailto:, tel:, ...).
fn is_external_link(link: &str) -> bool {
    link.split_once(':').is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
    })
}

/// Extract all link destinations from markdown content.
///
/// Collects destinations of inline links, reference links, and autolinks.
/// Images are skipped: asset references are not document links.
pub fn extract_links(markdown: &str) -> Vec<String> {
    let mut links = Vec::new();

    for event in Parser::new(markdown) {
        if let Event::Start(Tag::Link { dest_url, .. }) = event
            && !dest_url.is_empty()
        {
            links.push(dest_url.to_string());
        }
    }

    links
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://pub.dev/packages/contextual"),
            LinkKind::External(_)
        ));
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#configuration"),
            LinkKind::Fragment("configuration")
        ));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/api/overview"),
            LinkKind::SiteRoot("/api/overview")
        ));
    }

    #[test]
    fn test_parse_file_relative() {
        assert!(matches!(
            LinkKind::parse("../advanced/middleware.md"),
            LinkKind::FileRelative(_)
        ));
        assert!(matches!(
            LinkKind::parse("usage.md"),
            LinkKind::FileRelative(_)
        ));
    }

    #[test]
    fn test_extract_links() {
        let markdown = "\
# Usage

See [getting started](getting-started.md) and the [API](/api/overview).

External: [pub.dev](https://pub.dev/packages/contextual).

![diagram](img/flow.png)
";
        let links = extract_links(markdown);
        assert_eq!(
            links,
            vec![
                "getting-started.md",
                "/api/overview",
                "https://pub.dev/packages/contextual"
            ]
        );
    }

    #[test]
    fn test_extract_skips_empty() {
        assert!(extract_links("plain text, no links").is_empty());
    }
}
