//! File system errors

use super::PagematterError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PagematterError {
    PagematterError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PagematterError {
    PagematterError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for two pages mapped to the same output file
pub fn output_collision(
    path: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> PagematterError {
    PagematterError::OutputCollision {
        path: path.into(),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PagematterError {
    PagematterError::IoError {
        message: message.into(),
    }
}
