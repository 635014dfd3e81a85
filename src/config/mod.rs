//! Configuration file handling for pagematter
//!
//! This module contains data structures for:
//! - `pagematter.yaml` - Site configuration passed to the resolver

pub mod site;

pub use site::{CONFIG_FILE, SiteConfig};
