//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single broken reference
#[derive(Debug, Clone)]
pub struct BrokenRef {
    /// The reference/link that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified check report for all broken-reference findings
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Broken sidebar/navbar/footer references, grouped by source record.
    pub refs: BTreeMap<String, Vec<BrokenRef>>,
    /// Broken markdown content links, grouped by source file.
    pub markdown: BTreeMap<String, Vec<BrokenRef>>,
}

impl CheckReport {
    /// Add a broken config/sidebar reference.
    pub fn add_ref(&mut self, source: String, target: String, reason: String) {
        self.refs
            .entry(source)
            .or_default()
            .push(BrokenRef { target, reason });
    }

    /// Add a broken markdown link.
    pub fn add_markdown(&mut self, source: String, link: String, reason: String) {
        self.markdown.entry(source).or_default().push(BrokenRef {
            target: link,
            reason,
        });
    }

    /// Total broken reference count.
    pub fn ref_count(&self) -> usize {
        self.refs.values().map(|v| v.len()).sum()
    }

    /// Total broken markdown link count.
    pub fn markdown_count(&self) -> usize {
        self.markdown.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty() && self.markdown.is_empty()
    }

    /// Print the full report to stderr (refs -> markdown).
    pub fn print(&self) {
        self.print_section("references", &self.refs);
        self.print_section("markdown links", &self.markdown);
    }

    /// Print section with format (target + reason for non-empty reason).
    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<BrokenRef>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let source_count = errors.len();
        let error_count: usize = errors.values().map(|v| v.len()).sum();

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({source_count} source{}, {error_count} finding{})",
                plural_s(source_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (source, errs) in errors {
            // Source record or file
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason.dimmed());
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.ref_count() + self.markdown_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("broken reference{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = CheckReport::default();
        assert!(report.is_empty());
        assert_eq!(report.ref_count(), 0);
        assert!(format!("{report}").contains("all checks passed"));
    }

    #[test]
    fn test_counts_group_by_source() {
        let mut report = CheckReport::default();
        report.add_ref("sidebar 'docs'".into(), "missing-doc".into(), String::new());
        report.add_ref("sidebar 'docs'".into(), "other-doc".into(), String::new());
        report.add_markdown("docs/usage.md".into(), "./gone.md".into(), String::new());

        assert_eq!(report.ref_count(), 2);
        assert_eq!(report.markdown_count(), 1);
        assert_eq!(report.refs.len(), 1);
        assert!(format!("{report}").contains('3'));
    }
}
