//! Command helper utilities

use std::path::Path;

use pagematter::SiteConfig;
use pagematter::error::Result;
use pagematter::error::fs::io_error;

/// Load the site configuration for a command
///
/// If a configuration path is given it must exist. Otherwise `pagematter.yaml`
/// is looked up in the current directory, falling back to the defaults.
pub fn load_site_config(config: Option<&Path>) -> Result<SiteConfig> {
    match config {
        Some(path) => SiteConfig::load(path),
        None => {
            let current_dir = std::env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
            SiteConfig::discover(&current_dir)
        }
    }
}
