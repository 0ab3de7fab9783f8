//! Change records produced by a diff pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of change a property underwent between two document snapshots.
///
/// Precedence during classification: presence or absence of the property
/// (`New` / `Deleted`) dominates a structural-kind mismatch, which in turn
/// dominates value comparison. A kind change (say, array to object) is
/// always `Updated`, regardless of value equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeMode {
    /// The property is unchanged.
    Equal,
    /// The property did not exist in the old document.
    New,
    /// The property's value or shape changed.
    Updated,
    /// The property no longer exists in the new document.
    Deleted,
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeMode::Equal => "ChangeEqual",
            ChangeMode::New => "ChangeNew",
            ChangeMode::Updated => "ChangeUpdate",
            ChangeMode::Deleted => "ChangeDelete",
        };
        f.write_str(name)
    }
}

/// A single changed property.
///
/// Created once per property-level difference during a diff pass and
/// returned to the caller as a flat list; never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// The complete path of the property from the document root.
    pub path: Vec<String>,
    /// The era the property held *before* this update, i.e. the last era at
    /// which it differed from its predecessor.
    pub era: u64,
    /// Which kind of change it was.
    pub mode: ChangeMode,
}

impl Change {
    /// Create a new change record.
    pub fn new(path: Vec<String>, era: u64, mode: ChangeMode) -> Self {
        Self { path, era, mode }
    }
}
