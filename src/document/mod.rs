//! Front-matter documents
//!
//! A document is a YAML header between two `---` lines followed by a free-form
//! body. Parsing keeps the header's key order and the body verbatim, so a
//! parsed document serializes back to an equivalent text. Recognized renderer
//! options are type-checked on construction and exposed through [`PageConfig`].

pub mod frontmatter;
pub mod loader;
pub mod merge;
pub mod page;
pub mod schema;


use serde_yaml::{Mapping, Value};

use crate::error::Result;

pub use loader::{collect_inputs, discover_documents, load_document};
pub use page::{Align, FeedListing, PageConfig, Profile};

/// Key holding the routing identity of a page
pub const PERMALINK_KEY: &str = "permalink";

/// A parsed, validated front-matter document
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatterDocument {
    header: Mapping,
    body: String,
    page: PageConfig,
}

impl FrontMatterDocument {
    /// Build a document from a header and body, validating recognized options.
    pub fn new(header: Mapping, body: impl Into<String>) -> Result<Self> {
        schema::validate_header(&header)?;
        let page = PageConfig::from_header(&header)?;
        Ok(Self {
            header,
            body: body.into(),
            page,
        })
    }

    /// Parse a document from text.
    ///
    /// Fails with `MalformedDocument` when the first line is not `---`,
    /// `UnterminatedHeader` when no closing `---` follows, `InvalidHeader`
    /// when the header is not a YAML mapping with unique string keys, and
    /// `InvalidFieldType` when a recognized option has the wrong type.
    pub fn parse(text: &str) -> Result<Self> {
        let (raw_header, body) = frontmatter::split_frontmatter(text)?;
        let header = frontmatter::decode_header(raw_header)?;
        Self::new(header, body)
    }

    /// Serialize back to text. `parse(serialize(d)) == d` holds for every
    /// document.
    pub fn serialize(&self) -> Result<String> {
        let header = frontmatter::encode_header(&self.header)?;
        Ok(frontmatter::join_frontmatter(&header, &self.body))
    }

    pub fn header(&self) -> &Mapping {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Typed view of the recognized options
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Top-level header value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.header.get(key)
    }

    /// Routing identity, if the header sets one
    pub fn permalink(&self) -> Option<&str> {
        self.page.permalink.as_deref()
    }

    /// Derive a new document with `defaults` filled in under this document's
    /// own header values. The source document is left untouched.
    pub fn with_defaults(&self, defaults: &Mapping) -> Result<Self> {
        if defaults.is_empty() {
            return Ok(self.clone());
        }
        let header = merge::merge_defaults(self.header.clone(), defaults);
        Self::new(header, self.body.clone())
    }
}
