//! Version command implementation

use pagematter::document::schema::RECOGNIZED_FIELDS;
use pagematter::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_info());
    Ok(())
}

fn version_info() -> String {
    format!(
        "pagematter {}\n{}\n\nBuild info:\n  Minimum Rust version: {}\n  Profile: {}\n  Recognized page options: {}\n",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_RUST_VERSION"),
        build_profile(),
        RECOGNIZED_FIELDS.len()
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
