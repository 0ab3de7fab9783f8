//! The era tree: a structure mirroring a document's shape that stores
//! per-property era numbers instead of the actual values.
//!
//! # Wire shape
//!
//! A node serializes to a flat JSON object keyed by two disjoint prefix
//! spaces layered over the same property name: `"." + name` holds the
//! property's era number, and `"_" + name` (present only while the property
//! is itself an object or array) holds the nested node for its children:
//!
//! ```json
//! {".": 2, "_": {".a": 2, "_a": {".0": 1}}}
//! ```
//!
//! Deserialization is permissive: an entry whose value does not match its
//! prefix (a non-numeric era, a non-object child slot) is skipped with a
//! warning, and consumers treat the missing record as "already current".

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Key prefix for a property's era number.
const ERA_PREFIX: &str = ".";

/// Key prefix for a property's nested child node.
const CHILD_PREFIX: &str = "_";

/// One node of an era tree.
///
/// Invariants maintained by the diff engine: an era entry exists for every
/// property present in the current document except those deleted in the most
/// recent update; a child entry exists iff the property is currently an
/// object or array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EraNode {
    eras: BTreeMap<String, u64>,
    children: BTreeMap<String, EraNode>,
}

impl EraNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the node holds no entries of either kind.
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty() && self.children.is_empty()
    }

    /// The era number recorded for a property, if any.
    pub fn era(&self, name: &str) -> Option<u64> {
        self.eras.get(name).copied()
    }

    /// Record a property's era number.
    pub fn set_era(&mut self, name: impl Into<String>, era: u64) {
        self.eras.insert(name.into(), era);
    }

    /// The child node recorded for a property, if any.
    pub fn child(&self, name: &str) -> Option<&EraNode> {
        self.children.get(name)
    }

    /// Attach a child node under a property's child slot.
    pub fn insert_child(&mut self, name: impl Into<String>, child: EraNode) {
        self.children.insert(name.into(), child);
    }

    /// Iterate over `(property name, era)` entries in sorted name order.
    pub fn eras(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.eras.iter().map(|(name, era)| (name.as_str(), *era))
    }

    /// Iterate over `(property name, child node)` entries in sorted name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &EraNode)> + '_ {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Rebuild a node from its wire representation, skipping entries that do
    /// not match the shape described in the module docs.
    fn from_wire(map: &serde_json::Map<String, Value>) -> Self {
        let mut node = EraNode::new();
        for (key, value) in map {
            if let Some(name) = key.strip_prefix(ERA_PREFIX) {
                match wire_era(value) {
                    Some(era) => node.set_era(name, era),
                    None => {
                        tracing::warn!(key = %key, "skipping era entry with non-numeric value");
                    }
                }
            } else if let Some(name) = key.strip_prefix(CHILD_PREFIX) {
                match value.as_object() {
                    Some(child) => node.insert_child(name, EraNode::from_wire(child)),
                    None => {
                        tracing::warn!(key = %key, "skipping child slot that is not an object");
                    }
                }
            } else {
                tracing::warn!(key = %key, "skipping era entry with unknown prefix");
            }
        }
        node
    }
}

/// Read an era number from a wire value. Accepts integral floats as well,
/// truncating toward zero, since some encoders emit whole numbers with a
/// fractional representation.
fn wire_era(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

impl Serialize for EraNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.eras.len() + self.children.len()))?;
        for (name, era) in &self.eras {
            map.serialize_entry(&format!("{ERA_PREFIX}{name}"), era)?;
        }
        for (name, child) in &self.children {
            map.serialize_entry(&format!("{CHILD_PREFIX}{name}"), child)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EraNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::deserialize(deserializer)?;
        Ok(EraNode::from_wire(&map))
    }
}
