//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── footer     # [footer]
//! │   ├── markdown   # [markdown]
//! │   ├── navbar     # [navbar]
//! │   ├── site       # [site] and sub-sections
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                         |
//! |-----------------|-------------------------------------------------|
//! | `[site.info]`   | Site metadata (title, tagline, url, base_url)   |
//! | `[site.i18n]`   | Locales and default locale                      |
//! | `[markdown]`    | Broken-reference policies                       |
//! | `[theme]`       | Color mode and syntax highlighting              |
//! | `[navbar]`      | Top navigation entries                          |
//! | `[footer]`      | Footer link groups                              |

pub mod section;
pub mod types;
pub(crate) mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BrokenLinkPolicy, FooterConfig, MarkdownConfig, NavbarConfig, SiteSectionConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, i18n, source paths)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Broken-reference policies
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Navigation bar entries
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer link groups
    #[serde(default)]
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            markdown: MarkdownConfig::default(),
            theme: ThemeConfig::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The site root is
    /// determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                log!(
                    "error";
                    "Config file '{}' not found. Run 'docsite init' to create a new site.",
                    cli.config.display()
                );
                std::process::exit(1);
            }
        };

        debug!("config"; "using {}", config_path.display());

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    ///
    /// Resolves the site root and normalizes source paths to absolute form.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.root = crate::utils::path::normalize_path(&root);

        // CLI path overrides
        if let Some(docs) = &cli.docs {
            self.site.docs = docs.clone();
        }

        self.site.docs = crate::utils::path::normalize_path(&self.root.join(&self.site.docs));
        self.site.sidebars =
            crate::utils::path::normalize_path(&self.root.join(&self.site.sidebars));
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (site.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the site root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(&mut diag);
        self.site.i18n.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.navbar.validate(&mut diag);
        self.footer.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ntagline = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
