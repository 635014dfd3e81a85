//! Resolve command implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::ResolveArgs;
use crate::commands::helpers::load_site_config;
use pagematter::document::{collect_inputs, load_document};
use pagematter::error::Result;
use pagematter::error::fs::{output_collision, write_failed};
use pagematter::{DocumentResolver, FrontMatterDocument, ResolvedPage};

const INDEX_FILE: &str = "index.md";

pub fn run(config: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let mut site = load_site_config(config.as_deref())?;
    if args.strict {
        site.strict = true;
    }

    let inputs = collect_inputs(&args.paths, &site.include)?;
    let documents = inputs
        .iter()
        .map(|path| load_document(path))
        .collect::<Result<Vec<FrontMatterDocument>>>()?;

    let pages = DocumentResolver::new(site).resolve_all(&documents)?;
    for page in pages.iter().filter(|p| p.candidates > 1) {
        tracing::info!(
            permalink = %page.permalink,
            winner = %inputs[page.source_index].display(),
            candidates = page.candidates,
            "permalink overridden"
        );
    }

    match args.output {
        Some(dir) => write_pages(&dir, &pages),
        None => print_pages(&pages),
    }
}

fn print_pages(pages: &[ResolvedPage]) -> Result<()> {
    print!("{}", render_pages(pages)?);
    Ok(())
}

/// Serialize pages for stdout, one blank line between pages
fn render_pages(pages: &[ResolvedPage]) -> Result<String> {
    let rendered = pages
        .iter()
        .map(|page| -> Result<String> {
            let mut text = page.document.serialize()?;
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Ok(text)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}

fn write_pages(dir: &Path, pages: &[ResolvedPage]) -> Result<()> {
    let targets = plan_outputs(dir, pages)?;
    for (page, target) in pages.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| write_failed(parent.display().to_string(), e.to_string()))?;
        }
        std::fs::write(target, page.document.serialize()?)
            .map_err(|e| write_failed(target.display().to_string(), e.to_string()))?;
        tracing::debug!(permalink = %page.permalink, path = %target.display(), "wrote page");
    }
    println!("Resolved {} page(s) into {}", pages.len(), dir.display());
    Ok(())
}

/// Output file of every page. Fails before anything is written when two
/// permalinks map to the same file.
fn plan_outputs(dir: &Path, pages: &[ResolvedPage]) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    let mut targets = Vec::with_capacity(pages.len());
    for page in pages {
        let target = output_path(dir, &page.permalink);
        if let Some(first) = claimed.insert(target.clone(), &page.permalink) {
            return Err(output_collision(
                target.display().to_string(),
                first,
                page.permalink.as_str(),
            ));
        }
        targets.push(target);
    }
    Ok(targets)
}

/// Map a permalink to `<dir>/<segments>/index.md`; `/` maps to `<dir>/index.md`.
/// Empty, `.` and `..` segments are dropped so pages stay inside `dir`.
fn output_path(dir: &Path, permalink: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for segment in permalink
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
    {
        path.push(segment);
    }
    path.join(INDEX_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pagematter::PagematterError;

    fn pages(texts: &[&str]) -> Vec<ResolvedPage> {
        let documents: Vec<FrontMatterDocument> = texts
            .iter()
            .map(|text| FrontMatterDocument::parse(text).unwrap())
            .collect();
        DocumentResolver::default().resolve_all(&documents).unwrap()
    }

    #[test]
    fn test_render_pages_separates_with_blank_line() {
        let pages = pages(&["---\npermalink: /a/\n---\nA", "---\npermalink: /b/\n---\nB\n"]);
        assert_eq!(
            render_pages(&pages).unwrap(),
            "---\npermalink: /a/\n---\nA\n\n---\npermalink: /b/\n---\nB\n"
        );
    }

    #[test]
    fn test_plan_outputs_rejects_shared_target() {
        let pages = pages(&["---\npermalink: /about\n---\n", "---\npermalink: /about/\n---\n"]);
        let err = plan_outputs(Path::new("out"), &pages).unwrap_err();
        match err {
            PagematterError::OutputCollision { path, first, second } => {
                assert_eq!(PathBuf::from(path), PathBuf::from("out/about/index.md"));
                assert_eq!(first, "/about");
                assert_eq!(second, "/about/");
            }
            other => panic!("Expected OutputCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_outputs_rejects_traversal_alias_of_root() {
        let pages = pages(&["---\npermalink: /\n---\n", "---\npermalink: /..\n---\n"]);
        assert!(matches!(
            plan_outputs(Path::new("out"), &pages),
            Err(PagematterError::OutputCollision { .. })
        ));
    }

    #[test]
    fn test_plan_outputs_distinct_pages() {
        let pages = pages(&["---\npermalink: /\n---\n", "---\npermalink: /blog/\n---\n"]);
        let targets = plan_outputs(Path::new("out"), &pages).unwrap();
        assert_eq!(
            targets,
            [PathBuf::from("out/index.md"), PathBuf::from("out/blog/index.md")]
        );
    }

    #[test]
    fn test_output_path_root() {
        assert_eq!(
            output_path(Path::new("out"), "/"),
            PathBuf::from("out/index.md")
        );
    }

    #[test]
    fn test_output_path_nested() {
        assert_eq!(
            output_path(Path::new("out"), "/blog/2024/"),
            PathBuf::from("out/blog/2024/index.md")
        );
    }

    #[test]
    fn test_output_path_stays_inside_dir() {
        assert_eq!(
            output_path(Path::new("out"), "/../../etc/"),
            PathBuf::from("out/etc/index.md")
        );
    }
}
