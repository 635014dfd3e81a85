//! Error types and handling for pagematter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are organized into sub-modules by error domain:
//! - [`document`]: Front-matter splitting and header decoding
//! - [`field`]: Recognized option type checks
//! - [`resolve`]: Permalink resolution
//! - [`config`]: Site configuration
//! - [`fs`]: File system errors

pub mod config;
pub mod document;
pub mod field;
pub mod fs;
pub mod resolve;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pagematter operations
#[derive(Error, Diagnostic, Debug)]
pub enum PagematterError {
    // Document errors
    #[error("Document does not start with a front-matter delimiter")]
    #[diagnostic(
        code(pagematter::document::malformed),
        help("The first line of the document must be exactly '---'")
    )]
    MalformedDocument,

    #[error("Front-matter header is not terminated")]
    #[diagnostic(
        code(pagematter::document::unterminated_header),
        help("Close the header block with a second '---' line")
    )]
    UnterminatedHeader,

    #[error("Invalid front-matter header: {reason}")]
    #[diagnostic(code(pagematter::document::invalid_header))]
    InvalidHeader { reason: String },

    #[error("Failed to load document: {path}: {source}")]
    #[diagnostic(code(pagematter::document::load_failed))]
    DocumentLoadFailed {
        path: String,
        #[source]
        source: Box<PagematterError>,
    },

    #[error("Failed to serialize page options: {reason}")]
    #[diagnostic(code(pagematter::document::serialization_failed))]
    SerializationFailed { reason: String },

    #[error("{failed} of {total} documents failed to check")]
    #[diagnostic(code(pagematter::document::check_failed))]
    CheckFailed { failed: usize, total: usize },

    // Field errors
    #[error("Field '{field}' expects {expected}, found {found}")]
    #[diagnostic(
        code(pagematter::field::invalid_type),
        help("Check the value type of this option in the front matter")
    )]
    InvalidFieldType {
        field: String,
        expected: String,
        found: String,
    },

    // Resolution errors
    #[error("Permalink '{permalink}' is claimed by {count} documents")]
    #[diagnostic(
        code(pagematter::resolve::ambiguous_identity),
        help("Remove the duplicates or disable strict mode to let the last document win")
    )]
    AmbiguousIdentity { permalink: String, count: usize },

    #[error("Documents do not share one permalink: '{expected}' and '{found}'")]
    #[diagnostic(code(pagematter::resolve::identity_mismatch))]
    IdentityMismatch { expected: String, found: String },

    #[error("Document #{index} has no permalink")]
    #[diagnostic(
        code(pagematter::resolve::missing_permalink),
        help("Add a 'permalink' key to the front matter")
    )]
    MissingPermalink { index: usize },

    #[error("No documents to resolve")]
    #[diagnostic(code(pagematter::resolve::empty_input))]
    EmptyInput,

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(pagematter::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pagematter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pagematter::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(pagematter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(pagematter::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Pages '{first}' and '{second}' would both be written to {path}")]
    #[diagnostic(
        code(pagematter::fs::output_collision),
        help("Give the pages permalinks that differ in more than slashes or '.'/'..' segments")
    )]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(pagematter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PagematterError {
    fn from(err: std::io::Error) -> Self {
        PagematterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PagematterError {
    fn from(err: serde_yaml::Error) -> Self {
        PagematterError::InvalidHeader {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PagematterError {
    fn from(err: serde_json::Error) -> Self {
        PagematterError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PagematterError>;
