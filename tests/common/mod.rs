//! Common test utilities for pagematter integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway site directory for integration tests
pub struct TestSite {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new empty test site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the site
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the site
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture page into the site under `target`
    pub fn copy_fixture_page(&self, fixture_name: &str, target: &str) {
        self.write_file(target, &fixture(&format!("pages/{fixture_name}")));
    }

    /// Copy the fixture site configuration to `pagematter.yaml`
    pub fn copy_fixture_config(&self) {
        self.write_file("pagematter.yaml", &fixture("pagematter.yaml"));
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a fixture file by path relative to `tests/common/fixtures`
pub fn fixture(relative: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(relative);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

/// Command for the real pagematter binary, run from `dir` with a clean
/// logging environment
#[allow(deprecated)]
pub fn pagematter_cmd_in(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("pagematter").expect("binary should build");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("PAGEMATTER_CONFIG");
    cmd
}
