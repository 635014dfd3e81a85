//! pagematter - front-matter documents and permalink resolution
//!
//! Parses static-site pages written as a YAML front-matter block followed by a
//! free-form body, validates the options the renderer consumes, and resolves
//! several documents claiming the same permalink into the effective one.
//!
//! ```rust
//! use pagematter::{FrontMatterDocument, resolve};
//!
//! let first = FrontMatterDocument::parse("---\npermalink: /\n---\nold\n")?;
//! let second = FrontMatterDocument::parse("---\npermalink: /\n---\nnew\n")?;
//! let page = resolve(&[first, second])?;
//! assert_eq!(page.body(), "new\n");
//! # Ok::<(), pagematter::PagematterError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod resolver;

pub use config::SiteConfig;
pub use document::{FrontMatterDocument, PageConfig};
pub use error::{PagematterError, Result};
pub use resolver::{DocumentResolver, ResolvedPage, resolve};
