//! Load documents from files and directories
//!
//! Directories are walked recursively and filtered with include globs matched
//! against the path relative to the directory. Files named explicitly are
//! always loaded. Input order is kept so that last-write-wins follows the
//! order paths were given in.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::FrontMatterDocument;
use crate::error::Result;
use crate::error::config::invalid as config_invalid;
use crate::error::document::load_failed;
use crate::error::fs::read_failed;

/// Read and parse one document. Parse errors carry the file path.
pub fn load_document(path: &Path) -> Result<FrontMatterDocument> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
    FrontMatterDocument::parse(&content).map_err(|e| load_failed(path.display().to_string(), e))
}

fn compile_globs(include: &[String]) -> Result<Vec<Glob<'_>>> {
    include
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map_err(|e| config_invalid(format!("invalid include pattern '{pattern}': {e}")))
        })
        .collect()
}

/// Find page files under `root` whose relative path matches one of the
/// `include` globs, sorted by path.
pub fn discover_documents(root: &Path, include: &[String]) -> Result<Vec<PathBuf>> {
    let globs = compile_globs(include)?;

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let normalized = relative.to_string_lossy().replace('\\', "/");
            let candidate = CandidatePath::from(normalized.as_str());
            globs.iter().any(|glob| glob.matched(&candidate).is_some())
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    found.sort();
    tracing::debug!(root = %root.display(), count = found.len(), "discovered documents");
    Ok(found)
}

/// Expand the given paths into the list of files to load: files as given,
/// directories through [`discover_documents`].
pub fn collect_inputs(paths: &[PathBuf], include: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            inputs.extend(discover_documents(path, include)?);
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}
