//! Docsite - configuration and sidebar tooling for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod docs;
mod logger;
mod sidebar;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Init scaffolds the config files, so it runs before loading them
    if let Commands::Init { name } = &cli.command {
        return cli::init::new_site(name.as_deref());
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Show { args } => cli::show::show_records(&config, args),
    }
}
