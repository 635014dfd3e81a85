use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a single page:\n    pagematter check _pages/about.md\n\n\
                  Check every page under a directory:\n    pagematter check _pages")]
pub struct CheckArgs {
    /// Page files or directories to check
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}
