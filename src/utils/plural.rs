//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 docs)
/// - `plural_s(1)` -> `""` (1 doc)
/// - `plural_s(5)` -> `"s"` (5 docs)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "doc")` -> `"0 docs"`
/// - `plural_count(1, "doc")` -> `"1 doc"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
