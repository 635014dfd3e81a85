//! Recognized front-matter options and their value types.
//!
//! The external renderer consumes a fixed set of options. Only those are
//! type-checked; any other key passes through untouched. A `null` value is
//! accepted for every option and means "not set".

use serde_yaml::{Mapping, Value};

use super::frontmatter::describe;
use crate::error::Result;
use crate::error::document::invalid_header;
use crate::error::field::invalid_type;

/// Expected type of a recognized option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string
    Text,
    /// `true` or `false`
    Flag,
    /// Non-negative integer, `null` for unlimited
    Limit,
    /// `left` or `right`
    Align,
    /// Nested mapping of further options
    Group,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Flag => "a boolean",
            FieldKind::Limit => "a non-negative integer",
            FieldKind::Align => "one of 'left', 'right'",
            FieldKind::Group => "a mapping",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (FieldKind::Text, Value::String(_)) => true,
            (FieldKind::Flag, Value::Bool(_)) => true,
            (FieldKind::Limit, Value::Number(n)) => n.as_u64().is_some(),
            (FieldKind::Align, Value::String(s)) => ALIGNMENTS.contains(&s.as_str()),
            (FieldKind::Group, Value::Mapping(_)) => true,
            _ => false,
        }
    }
}

const ALIGNMENTS: &[&str] = &["left", "right"];

/// Options consumed by the renderer, by dotted path.
pub const RECOGNIZED_FIELDS: &[(&str, FieldKind)] = &[
    ("layout", FieldKind::Text),
    ("title", FieldKind::Text),
    ("subtitle", FieldKind::Text),
    ("permalink", FieldKind::Text),
    ("selected_papers", FieldKind::Flag),
    ("social", FieldKind::Flag),
    ("profile", FieldKind::Group),
    ("profile.align", FieldKind::Align),
    ("profile.image", FieldKind::Text),
    ("profile.image_circular", FieldKind::Flag),
    ("profile.more_info", FieldKind::Text),
    ("announcements", FieldKind::Group),
    ("announcements.enabled", FieldKind::Flag),
    ("announcements.scrollable", FieldKind::Flag),
    ("announcements.limit", FieldKind::Limit),
    ("latest_posts", FieldKind::Group),
    ("latest_posts.enabled", FieldKind::Flag),
    ("latest_posts.scrollable", FieldKind::Flag),
    ("latest_posts.limit", FieldKind::Limit),
];

/// Look up the expected type of an option by dotted path.
pub fn field_kind(path: &str) -> Option<FieldKind> {
    RECOGNIZED_FIELDS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, kind)| *kind)
}

/// Check that top-level keys are strings and every recognized option in
/// `header` has its expected type.
pub fn validate_header(header: &Mapping) -> Result<()> {
    if let Some(key) = header.keys().find(|k| !k.is_string()) {
        return Err(invalid_header(format!(
            "keys must be strings, found {}",
            describe(key)
        )));
    }
    validate_mapping(header, None)
}

fn validate_mapping(mapping: &Mapping, prefix: Option<&str>) -> Result<()> {
    for (key, value) in mapping {
        let path = match (prefix, key.as_str()) {
            (Some(prefix), Some(key)) => format!("{prefix}.{key}"),
            (None, Some(key)) => key.to_string(),
            (Some(prefix), None) => {
                return Err(invalid_header(format!(
                    "keys in '{prefix}' must be strings, found {}",
                    describe(key)
                )));
            }
            (None, None) => continue,
        };
        let Some(kind) = field_kind(&path) else {
            continue;
        };

        if !kind.accepts(value) {
            return Err(invalid_type(path, kind.expected(), describe(value)));
        }
        if let (FieldKind::Group, Value::Mapping(group)) = (kind, value) {
            validate_mapping(group, Some(&path))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagematterError;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).expect("test yaml should parse")
    }

    fn field_of(err: PagematterError) -> String {
        match err {
            PagematterError::InvalidFieldType { field, .. } => field,
            other => panic!("expected InvalidFieldType, got {other:?}"),
        }
    }

    #[test]
    fn accepts_sample_about_header() {
        let header = mapping(
            r"
layout: about
title: about
permalink: /
subtitle: Affiliations. Address.
profile:
  align: right
  image: prof_pic.jpg
  image_circular: false
  more_info: >
    <p>555 your office number</p>
announcements:
  enabled: true
  scrollable: true
  limit: 5
latest_posts:
  enabled: true
  scrollable: true
  limit: 3
selected_papers: true
social: true
",
        );
        assert!(validate_header(&header).is_ok());
    }

    #[test]
    fn limit_must_be_an_integer() {
        let header = mapping("announcements:\n  limit: five\n");
        let err = validate_header(&header).expect_err("string limit");
        assert!(err.to_string().contains("non-negative integer"));
        assert_eq!(field_of(err), "announcements.limit");
    }

    #[test]
    fn limit_must_not_be_negative() {
        let header = mapping("latest_posts:\n  limit: -1\n");
        let err = validate_header(&header).expect_err("negative limit");
        assert_eq!(field_of(err), "latest_posts.limit");
    }

    #[test]
    fn blank_limit_means_unlimited() {
        let header = mapping("announcements:\n  enabled: true\n  limit:\n");
        assert!(validate_header(&header).is_ok());
    }

    #[test]
    fn align_must_be_left_or_right() {
        let header = mapping("profile:\n  align: center\n");
        let err = validate_header(&header).expect_err("bad align");
        assert_eq!(field_of(err), "profile.align");
    }

    #[test]
    fn group_keys_must_be_strings() {
        let header = mapping("profile:\n  0: left\n");
        let err = validate_header(&header).expect_err("integer key in group");
        assert!(matches!(err, PagematterError::InvalidHeader { .. }));
        assert!(err.to_string().contains("keys in 'profile' must be strings"));
    }

    #[test]
    fn unrecognized_groups_are_not_checked() {
        let header = mapping("extra:\n  0: anything\n");
        assert!(validate_header(&header).is_ok());
    }

    #[test]
    fn flags_must_be_booleans() {
        let header = mapping("profile:\n  image_circular: \"yes\"\n");
        let err = validate_header(&header).expect_err("quoted flag");
        assert_eq!(field_of(err), "profile.image_circular");
    }

    #[test]
    fn groups_must_be_mappings() {
        let header = mapping("announcements: true\n");
        let err = validate_header(&header).expect_err("scalar group");
        assert_eq!(field_of(err), "announcements");
    }

    #[test]
    fn permalink_must_be_a_string() {
        let header = mapping("permalink: 42\n");
        let err = validate_header(&header).expect_err("numeric permalink");
        assert_eq!(field_of(err), "permalink");
    }

    #[test]
    fn rejects_non_string_keys() {
        let header = mapping("1: one\n");
        let err = validate_header(&header).expect_err("integer key");
        assert!(matches!(err, PagematterError::InvalidHeader { .. }));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let header = mapping("custom:\n  limit: whatever\nnav: 3\n");
        assert!(validate_header(&header).is_ok());
    }

    #[test]
    fn field_kind_lookup() {
        assert_eq!(field_kind("profile.align"), Some(FieldKind::Align));
        assert_eq!(field_kind("announcements.limit"), Some(FieldKind::Limit));
        assert_eq!(field_kind("limit"), None);
    }
}
