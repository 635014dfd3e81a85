use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the options of a page:\n    pagematter show _pages/about.md\n\n\
                  Print the options as JSON:\n    pagematter show _pages/about.md --json")]
pub struct ShowArgs {
    /// Page file to show
    pub path: PathBuf,

    /// Print the recognized options as JSON
    #[arg(long)]
    pub json: bool,
}
