//! pagematter - front-matter page checker and permalink resolver
//!
//! Command line front end over the `pagematter` library: validates static-site
//! pages and resolves pages that share a permalink.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.config, args),
        Commands::Resolve(args) => commands::resolve::run(cli.config, args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
