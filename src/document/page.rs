//! Typed view of the options the renderer consumes.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::Result;

/// Recognized page options. Every field is optional; unknown header keys are
/// not represented here but stay in the document header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcements: Option<FeedListing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_posts: Option<FeedListing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_papers: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<bool>,
}

/// Profile picture block shown next to the page body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Asset path of the picture, relative to the site's image directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_circular: Option<bool>,

    /// Raw HTML rendered under the picture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
        }
    }
}

/// Options of a feed listing widget (announcements, latest posts)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,

    /// Maximum number of entries; `None` lists everything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl FeedListing {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable.unwrap_or(false)
    }

    /// Number of entries to show out of `available`
    pub fn visible_count(&self, available: usize) -> usize {
        match self.limit {
            Some(limit) => usize::try_from(limit).map_or(available, |l| l.min(available)),
            None => available,
        }
    }
}

impl PageConfig {
    /// Build the typed view from a header whose recognized options have
    /// already been validated.
    pub fn from_header(header: &Mapping) -> Result<Self> {
        Ok(serde_yaml::from_value(Value::Mapping(header.clone()))?)
    }
}
