//! Deep merge of site-wide defaults under a document header
//!
//! Defaults never override what a document sets itself:
//!
//! ```text
//! Defaults: {layout: page, profile: {align: right, image_circular: false}}
//! Document: {title: about, profile: {align: left}}
//! Result:   {title: about, profile: {align: left, image_circular: false}, layout: page}
//! ```
//!
//! Nested mappings merge recursively. Any other document value, including
//! `null` and sequences, replaces the default entirely. Key order follows the
//! document; keys only present in the defaults are appended.

use serde_yaml::{Mapping, Value};

/// Fill `header` with entries from `defaults` that it does not set itself.
pub fn merge_defaults(mut header: Mapping, defaults: &Mapping) -> Mapping {
    for (key, default) in defaults {
        match header.get_mut(key) {
            Some(Value::Mapping(group)) => {
                if let Value::Mapping(default_group) = default {
                    let current = std::mem::take(group);
                    *group = merge_defaults(current, default_group);
                }
            }
            Some(_) => {}
            None => {
                header.insert(key.clone(), default.clone());
            }
        }
    }
    header
}
