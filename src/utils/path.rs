//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute_passthrough() {
        let path = Path::new("/nonexistent/docs");
        assert_eq!(normalize_path(path), PathBuf::from("/nonexistent/docs"));
    }

    #[test]
    fn test_normalize_relative_is_absolute() {
        let normalized = normalize_path(Path::new("some/relative/docs"));
        assert!(normalized.is_absolute());
    }
}
