//! Era diff engine for jera.
//!
//! Compares two snapshots of a JSON document, producing a new era tree that
//! mirrors the new document's shape and a flat list of property changes.
//! The era tree records, for every property, the era (a monotonic
//! generation counter) at which that property last changed.
//!
//! # Key Types
//!
//! - [`diff`] — Compare a new document against an old one and its era tree
//! - [`EraDocument`] — The persisted unit: document, era tree, era counter,
//!   with the single mutating `update` operation

pub mod document;
pub mod engine;

pub use document::EraDocument;
pub use engine::diff;
