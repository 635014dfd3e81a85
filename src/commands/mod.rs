//! Command implementations for pagematter CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod resolve;
pub mod show;
pub mod version;
