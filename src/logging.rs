//! Logging setup for the CLI
//!
//! Logs go to stderr so that resolved pages on stdout stay machine-readable.
//! `RUST_LOG` takes precedence over the `--verbose` and `--quiet` flags.

use tracing_subscriber::EnvFilter;

fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "pagematter=debug"
    } else if quiet {
        "pagematter=error"
    } else {
        "pagematter=warn"
    }
}

/// Initialize the tracing subscriber once at startup.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(true, false), "pagematter=debug");
        assert_eq!(default_filter(false, true), "pagematter=error");
        assert_eq!(default_filter(false, false), "pagematter=warn");
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(false, true);
        init_logger(true, false);
    }
}
