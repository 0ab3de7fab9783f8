//! The persisted state container for a tracked document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jera_types::{Change, EraNode};

use crate::engine::diff;

/// A document together with its era tree and the current era counter.
///
/// This is the unit of persistence: serialize it after an update and feed it
/// back in before the next one. The wire shape is
/// `{"doc": ..., "era": ..., "docEra": N}`.
///
/// There is no internal synchronization; callers that share an instance
/// across threads must serialize access themselves, or the read-then-commit
/// in [`update`](EraDocument::update) will race.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EraDocument {
    /// The current known version of the document.
    pub doc: Value,
    /// Mirrors the document, holding era numbers that say when each
    /// property last changed.
    pub era: EraNode,
    /// The current era number.
    #[serde(rename = "docEra")]
    pub doc_era: u32,
}

impl EraDocument {
    /// Create and initialize the era state for a document.
    ///
    /// The document is diffed against an absent predecessor, so every
    /// property starts out as new and the era counter lands at 1. The
    /// initial change list is not reported; a subsequent [`update`] with
    /// the same document finds nothing.
    ///
    /// [`update`]: EraDocument::update
    pub fn new(doc: Value) -> Self {
        let (era, _changes) = diff(&doc, None, &EraNode::new(), 1);
        Self {
            doc,
            era,
            doc_era: 1,
        }
    }

    /// Update the tracked document, returning all found changes.
    ///
    /// When at least one change is found, the new document, the new era
    /// tree, and the advanced era counter are committed together. A no-op
    /// update leaves the state untouched and returns an empty list.
    pub fn update(&mut self, new_doc: Value) -> Vec<Change> {
        let (era, changes) = diff(&new_doc, Some(&self.doc), &self.era, self.doc_era + 1);

        if !changes.is_empty() {
            tracing::debug!(
                changes = changes.len(),
                era = self.doc_era + 1,
                "committing document update"
            );
            self.doc = new_doc;
            self.era = era;
            self.doc_era += 1;
        }

        changes
    }
}
