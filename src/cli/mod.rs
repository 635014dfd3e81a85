//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - resolve: Resolve command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod resolve;
pub mod show;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use resolve::ResolveArgs;
pub use show::ShowArgs;

/// pagematter - front-matter pages and permalink resolution
#[derive(Parser, Debug)]
#[command(
    name = "pagematter",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Front-matter page checker and permalink resolver for static sites",
    long_about = "pagematter parses static-site pages (YAML front matter followed by a body), \
                  validates the options the renderer consumes, and resolves pages that share \
                  a permalink, the last one given winning.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pagematter check _pages                  \x1b[90m# Validate every page\x1b[0m\n   \
                  pagematter resolve _pages _overrides     \x1b[90m# Later pages override earlier ones\x1b[0m\n   \
                  pagematter resolve _pages --strict       \x1b[90m# Reject duplicate permalinks\x1b[0m\n   \
                  pagematter show _pages/about.md --json   \x1b[90m# Print page options as JSON\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site configuration file (defaults to ./pagematter.yaml when present)
    #[arg(long, short = 'c', global = true, env = "PAGEMATTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate pages
    Check(CheckArgs),

    /// Resolve pages sharing a permalink
    Resolve(ResolveArgs),

    /// Show the options of a page
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
