//! Field type errors

use super::PagematterError;

/// Creates an invalid field type error
pub fn invalid_type(
    field: impl Into<String>,
    expected: impl Into<String>,
    found: impl Into<String>,
) -> PagematterError {
    PagematterError::InvalidFieldType {
        field: field.into(),
        expected: expected.into(),
        found: found.into(),
    }
}
