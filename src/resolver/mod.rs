//! Permalink resolution
//!
//! Several documents may claim the same permalink. The resolver picks the
//! effective one without merging fields across documents:
//!
//! - **Last-write-wins** (default): the document appearing last in the input
//!   wins as a whole.
//! - **Strict**: more than one candidate is an `AmbiguousIdentity` error.
//!
//! Site defaults from [`SiteConfig`] are then filled in under the winner.
//! Inputs are never modified; resolution always yields new documents.


use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::document::FrontMatterDocument;
use crate::error::resolve::{ambiguous, mismatch, missing_permalink};
use crate::error::{PagematterError, Result};

/// The effective document for one permalink
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub permalink: String,
    pub document: FrontMatterDocument,
    /// Number of input documents that claimed this permalink
    pub candidates: usize,
    /// Input position of the winning document
    pub source_index: usize,
}

/// Resolves documents sharing a permalink according to a [`SiteConfig`]
#[derive(Debug, Clone, Default)]
pub struct DocumentResolver {
    config: SiteConfig,
}

fn identity(document: &FrontMatterDocument, index: usize) -> Result<&str> {
    document.permalink().ok_or_else(|| missing_permalink(index))
}

impl DocumentResolver {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolve documents that all claim one permalink into the effective
    /// document.
    pub fn resolve(&self, documents: &[FrontMatterDocument]) -> Result<FrontMatterDocument> {
        let first = documents.first().ok_or(PagematterError::EmptyInput)?;
        let permalink = identity(first, 0)?;

        for (index, document) in documents.iter().enumerate().skip(1) {
            let other = identity(document, index)?;
            if other != permalink {
                return Err(mismatch(permalink, other));
            }
        }

        let winner = &documents[documents.len() - 1];
        self.finish(permalink, documents.len(), winner)
    }

    /// Group documents by permalink and resolve every group. Pages are
    /// returned in order of the first appearance of their permalink.
    pub fn resolve_all(&self, documents: &[FrontMatterDocument]) -> Result<Vec<ResolvedPage>> {
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for (index, document) in documents.iter().enumerate() {
            let permalink = identity(document, index)?;
            match positions.get(permalink) {
                Some(&group) => groups[group].1.push(index),
                None => {
                    positions.insert(permalink, groups.len());
                    groups.push((permalink, vec![index]));
                }
            }
        }

        groups
            .into_iter()
            .map(|(permalink, members)| {
                let source_index = members[members.len() - 1];
                let document = self.finish(permalink, members.len(), &documents[source_index])?;
                Ok(ResolvedPage {
                    permalink: permalink.to_string(),
                    document,
                    candidates: members.len(),
                    source_index,
                })
            })
            .collect()
    }

    fn finish(
        &self,
        permalink: &str,
        candidates: usize,
        winner: &FrontMatterDocument,
    ) -> Result<FrontMatterDocument> {
        if candidates > 1 {
            if self.config.strict {
                return Err(ambiguous(permalink, candidates));
            }
            tracing::debug!(permalink, candidates, "last document overrides earlier ones");
        }
        winner.with_defaults(&self.config.defaults)
    }
}

/// Resolve with the default site configuration (last-write-wins, no
/// defaults).
pub fn resolve(documents: &[FrontMatterDocument]) -> Result<FrontMatterDocument> {
    DocumentResolver::default().resolve(documents)
}
