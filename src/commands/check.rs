//! Check command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::CheckArgs;
use crate::commands::helpers::load_site_config;
use pagematter::document::{collect_inputs, load_document};
use pagematter::error::{PagematterError, Result};

pub fn run(config: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let site = load_site_config(config.as_deref())?;
    let inputs = collect_inputs(&args.paths, &site.include)?;

    if inputs.is_empty() {
        println!("No pages found.");
        return Ok(());
    }

    let mut failed = 0;
    for path in &inputs {
        match load_document(path) {
            Ok(document) => {
                let identity = document.permalink().unwrap_or("(no permalink)");
                println!(
                    "{} {} {}",
                    Style::new().green().bold().apply_to("ok"),
                    path.display(),
                    Style::new().dim().apply_to(identity)
                );
            }
            Err(e) => {
                failed += 1;
                tracing::debug!(path = %path.display(), error = %e, "check failed");
                println!("{} {}", Style::new().red().bold().apply_to("error"), e);
            }
        }
    }

    if failed > 0 {
        return Err(PagematterError::CheckFailed {
            failed,
            total: inputs.len(),
        });
    }
    Ok(())
}
