//! Shared link-target validation for navbar and footer entries.

use crate::config::{ConfigDiagnostics, FieldPath};

/// Validate an external link target (`href`).
///
/// # Checks
/// - Must parse as a URL
/// - Scheme must be http or https
/// - Must have a valid host
pub(crate) fn validate_external_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
