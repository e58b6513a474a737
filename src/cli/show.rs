//! Show command: print resolved configuration records as JSON.
//!
//! This is the loader surface for external consumers: the generator (or
//! any other tool) can read the fully resolved SiteConfig or sidebar
//! trees without parsing TOML itself.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::ShowArgs;
use crate::config::SiteConfig;
use crate::sidebar::Sidebars;

/// Print the resolved site config or sidebar trees.
pub fn show_records(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let json = if args.sidebars {
        let sidebars = Sidebars::load(&config.site.sidebars)?;
        to_json(&sidebars, args.pretty)?
    } else {
        to_json(config, args.pretty)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// Serialize a record to JSON, preserving declaration order.
fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
