//! Split documents into YAML front matter and body, and join them back.

use serde_yaml::{Mapping, Value};

use crate::error::document::invalid_header;
use crate::error::{PagematterError, Result};

/// Marker line opening and closing the front-matter block
pub const DELIMITER: &str = "---";

const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split content into the raw header text (between the first two `---` lines)
/// and the body that follows the closing delimiter, verbatim.
///
/// The opening delimiter must be the first line. Any later `---` lines belong
/// to the body.
pub fn split_frontmatter(content: &str) -> Result<(&str, &str)> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next().ok_or(PagematterError::MalformedDocument)?;
    if !is_delimiter(opening) {
        return Err(PagematterError::MalformedDocument);
    }

    let header_start = opening.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((header, body));
        }
        offset += line.len();
    }

    Err(PagematterError::UnterminatedHeader)
}

/// Short human description of a YAML value, used in error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) if n.is_f64() => format!("float {n}"),
        Value::Number(n) => format!("integer {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

/// Decode raw header text into an ordered mapping.
///
/// A blank header (or one containing only `null`) decodes to an empty mapping.
pub fn decode_header(header: &str) -> Result<Mapping> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value = serde_yaml::from_str(header)?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(invalid_header(format!(
            "expected a mapping, found {}",
            describe(&other)
        ))),
    }
}

/// Encode a header mapping as YAML text, one trailing newline included.
/// An empty mapping encodes to an empty string.
pub fn encode_header(header: &Mapping) -> Result<String> {
    if header.is_empty() {
        return Ok(String::new());
    }
    Ok(serde_yaml::to_string(header)?)
}

/// Join an encoded header and a body into a full document.
pub fn join_frontmatter(header: &str, body: &str) -> String {
    format!("{DELIMITER}\n{header}{DELIMITER}\n{body}")
}
