//! Document errors

use super::PagematterError;

/// Creates an invalid header error
pub fn invalid_header(reason: impl Into<String>) -> PagematterError {
    PagematterError::InvalidHeader {
        reason: reason.into(),
    }
}

/// Wraps a parse error with the path of the file it came from
pub fn load_failed(path: impl Into<String>, source: PagematterError) -> PagematterError {
    PagematterError::DocumentLoadFailed {
        path: path.into(),
        source: Box::new(source),
    }
}
