use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve pages, later paths overriding earlier ones:\n    pagematter resolve _pages/about.md _drafts/about.md\n\n\
                  Fail when two pages claim the same permalink:\n    pagematter resolve _pages --strict\n\n\
                  Write resolved pages to a directory:\n    pagematter resolve _pages --output _site_src")]
pub struct ResolveArgs {
    /// Page files or directories, in override order
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Treat two documents with the same permalink as an error
    #[arg(long)]
    pub strict: bool,

    /// Write each resolved page to <DIR>/<permalink>/index.md instead of stdout
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,
}
