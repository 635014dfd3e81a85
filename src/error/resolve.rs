//! Resolution errors

use super::PagematterError;

/// Creates an ambiguous identity error
pub fn ambiguous(permalink: impl Into<String>, count: usize) -> PagematterError {
    PagematterError::AmbiguousIdentity {
        permalink: permalink.into(),
        count,
    }
}

/// Creates an identity mismatch error
pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> PagematterError {
    PagematterError::IdentityMismatch {
        expected: expected.into(),
        found: found.into(),
    }
}

/// Creates a missing permalink error for the document at `index`
pub fn missing_permalink(index: usize) -> PagematterError {
    PagematterError::MissingPermalink { index }
}
