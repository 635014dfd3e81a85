//! Site configuration (pagematter.yaml) data structures
//!
//! Site-wide settings are an explicit value handed to the resolver:
//!
//! ```yaml
//! strict: false
//! include:
//!   - "**/*.md"
//! defaults:
//!   layout: page
//!   profile:
//!     align: right
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::document::schema;
use crate::error::Result;
use crate::error::config::{invalid, not_found, parse_failed};
use crate::error::fs::read_failed;

/// Name of the site configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "pagematter.yaml";

fn default_include() -> Vec<String> {
    vec!["**/*.md".to_string(), "**/*.markdown".to_string()]
}

/// Site configuration (pagematter.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Fail with `AmbiguousIdentity` instead of letting the last document win
    #[serde(default)]
    pub strict: bool,

    /// Front-matter values applied to every resolved page that does not set
    /// them itself
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub defaults: Mapping,

    /// Glob patterns selecting page files when a directory is given
    #[serde(default = "default_include")]
    pub include: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            strict: false,
            defaults: Mapping::new(),
            include: default_include(),
        }
    }
}

impl SiteConfig {
    /// Parse site configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse_at(yaml, "<inline>")
    }

    fn parse_at(yaml: &str, origin: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| parse_failed(origin, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load site configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let config = Self::parse_at(&yaml, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), strict = config.strict, "loaded site config");
        Ok(config)
    }

    /// Load `pagematter.yaml` from `dir` if present, otherwise the defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize site configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.include.is_empty() {
            return Err(invalid("include must list at least one pattern"));
        }
        schema::validate_header(&self.defaults)
            .map_err(|e| invalid(format!("defaults: {e}")))
    }
}
