//! `[markdown]` section configuration.
//!
//! Declares how broken references are treated when the site is checked
//! or built.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! on_broken_links = "throw"           # throw | warn | ignore
//! on_broken_markdown_links = "warn"   # throw | warn | ignore
//! ```

use serde::{Deserialize, Serialize};

/// How to treat a broken reference once detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the run.
    Throw,
    /// Report and continue.
    Warn,
    /// Skip detection entirely.
    Ignore,
}

impl BrokenLinkPolicy {
    /// True if findings under this policy fail the run.
    #[inline]
    pub fn is_error(self) -> bool {
        self == Self::Throw
    }

    /// True if detection is skipped entirely.
    #[inline]
    pub fn is_ignore(self) -> bool {
        self == Self::Ignore
    }
}

/// Broken-reference policies for documents and their markdown links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Policy for sidebar document references and internal link targets.
    pub on_broken_links: BrokenLinkPolicy,

    /// Policy for links written inside markdown content.
    pub on_broken_markdown_links: BrokenLinkPolicy,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            on_broken_links: BrokenLinkPolicy::Throw,
            on_broken_markdown_links: BrokenLinkPolicy::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.markdown.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(
            config.markdown.on_broken_markdown_links,
            BrokenLinkPolicy::Warn
        );
    }

    #[test]
    fn test_custom_policies() {
        let config = test_parse_config(
            "[markdown]\non_broken_links = \"warn\"\non_broken_markdown_links = \"ignore\"",
        );
        assert_eq!(config.markdown.on_broken_links, BrokenLinkPolicy::Warn);
        assert!(config.markdown.on_broken_markdown_links.is_ignore());
    }

    #[test]
    fn test_policy_severity() {
        assert!(BrokenLinkPolicy::Throw.is_error());
        assert!(!BrokenLinkPolicy::Warn.is_error());
        assert!(!BrokenLinkPolicy::Ignore.is_error());
    }
}
