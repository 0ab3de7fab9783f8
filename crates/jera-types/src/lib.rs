//! Foundation types for jera, the era-based JSON change tracker.
//!
//! This crate provides the vocabulary shared by the walker, the diff engine,
//! and the CLI. Documents are plain [`serde_json::Value`] trees; everything
//! here describes *how they change*, not what they contain.
//!
//! # Key Types
//!
//! - [`ValueKind`] — Structural classification of a value (basic / object / array)
//! - [`ChangeMode`] — The kind of change a property underwent
//! - [`Change`] — One changed property: path, previous era, mode
//! - [`EraNode`] — A tree mirroring the document's shape, holding per-property
//!   era numbers instead of values

pub mod change;
pub mod compare;
pub mod era_tree;
pub mod kind;

pub use change::{Change, ChangeMode};
pub use compare::compare_basic;
pub use era_tree::EraNode;
pub use kind::{value_kind, ValueKind};
