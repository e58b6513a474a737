//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docsite documentation configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Docs directory path (relative to site root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub docs: Option<PathBuf>,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize starter config, sidebar, and doc files
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Check config, sidebars, and document references
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print resolved configuration records as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat broken references as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Skip scanning markdown content for broken links
    #[arg(long)]
    pub no_markdown: bool,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Print the sidebar trees instead of the site config
    #[arg(short, long)]
    pub sidebars: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_show(&self) -> bool {
        matches!(self.command, Commands::Show { .. })
    }
}
