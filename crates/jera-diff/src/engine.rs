//! The recursive diff core: walk two documents in lockstep, classify each
//! property's change, and build the era tree for the new document.

use serde_json::Value;

use jera_types::{compare_basic, value_kind, Change, ChangeMode, EraNode, ValueKind};
use jera_walk::visit_pairs;

/// Name of the synthetic property both documents are wrapped under.
const ROOT_NAME: &str = "";

/// Compare `new_doc` against `old_doc` and its era tree.
///
/// Returns the era tree for the new document and every property-level
/// change, with the era each changed property held *before* this update.
/// A child's changes precede its parent's in the returned list. `old_doc`
/// is `None` when no prior snapshot exists, in which case every property
/// classifies as new.
///
/// The walk is total for well-formed inputs and recursion depth equals the
/// document's nesting depth, so extremely deep documents can exhaust the
/// stack.
pub fn diff(
    new_doc: &Value,
    old_doc: Option<&Value>,
    old_era: &EraNode,
    new_era: u32,
) -> (EraNode, Vec<Change>) {
    let new_wrapped = wrap(Some(new_doc));
    let old_wrapped = wrap(old_doc);

    let (era_tree, changes, _schema_changed) = build_sub_era(
        &[],
        Some(&new_wrapped),
        Some(&old_wrapped),
        Some(old_era),
        new_era,
    );

    (era_tree, changes)
}

/// Pack a document as the sole value of a synthetic single-property object.
/// A type change of the document root then surfaces as an ordinary property
/// change instead of a special case. An absent document wraps to an empty
/// object, leaving the synthetic property absent on that side.
fn wrap(doc: Option<&Value>) -> Value {
    let mut wrapper = serde_json::Map::new();
    if let Some(doc) = doc {
        wrapper.insert(ROOT_NAME.to_string(), doc.clone());
    }
    Value::Object(wrapper)
}

/// Diff the properties of one container pair, returning the era node for the
/// new side, the changes found below this point, and whether this
/// container's own membership changed (a property was added or removed).
fn build_sub_era(
    path: &[String],
    new_val: Option<&Value>,
    old_val: Option<&Value>,
    old_era: Option<&EraNode>,
    new_era: u32,
) -> (EraNode, Vec<Change>, bool) {
    let mut node = EraNode::new();
    let mut changes = Vec::new();
    let mut schema_changed = false;
    let depth = path.len();

    visit_pairs(path, new_val, old_val, &mut |prop_path, new_prop, old_prop| {
        if prop_path.len() == depth {
            // The container itself; let the walker enumerate its properties.
            return true;
        }
        let Some(name) = prop_path.last() else {
            return false;
        };

        let mut mode = classify(new_prop, old_prop);
        if matches!(mode, ChangeMode::New | ChangeMode::Deleted) {
            schema_changed = true;
        }

        // Recurse regardless of kind: a container replaced by a scalar still
        // reports its former children deleted, and the reverse reports the
        // new children as new.
        let (child_node, child_changes, child_schema_changed) = build_sub_era(
            prop_path,
            new_prop,
            old_prop,
            old_era.and_then(|era| era.child(name)),
            new_era,
        );

        // Only the new value's shape decides whether a child slot exists.
        if new_prop.map(value_kind).is_some_and(ValueKind::is_container) {
            node.insert_child(name.clone(), child_node);
        }

        if child_schema_changed && mode == ChangeMode::Equal {
            // A property was added or removed one level below; the container
            // counts as updated even though no leaf value differed.
            mode = ChangeMode::Updated;
        }

        // A property with no prior era record is treated as already current,
        // so a first observation is not flagged with a stale era.
        let previous_era = old_era
            .and_then(|era| era.era(name))
            .unwrap_or(u64::from(new_era));

        changes.extend(child_changes);

        if mode == ChangeMode::Equal {
            node.set_era(name.clone(), previous_era);
        } else {
            // The synthetic root segment is stripped from reported paths.
            changes.push(Change::new(prop_path[1..].to_vec(), previous_era, mode));
            if mode != ChangeMode::Deleted {
                node.set_era(name.clone(), u64::from(new_era));
            }
        }

        // The engine recurses explicitly above, interleaving era-tree
        // construction with the walk.
        false
    });

    (node, changes, schema_changed)
}

/// Classify one property by precedence: absence dominates a kind mismatch,
/// which dominates value comparison. Matching container kinds are
/// tentatively equal until recursion has examined their membership.
fn classify(new_val: Option<&Value>, old_val: Option<&Value>) -> ChangeMode {
    match (new_val, old_val) {
        (None, _) => ChangeMode::Deleted,
        (Some(_), None) => ChangeMode::New,
        (Some(new_val), Some(old_val)) => {
            let new_kind = value_kind(new_val);
            if new_kind != value_kind(old_val) {
                ChangeMode::Updated
            } else if new_kind == ValueKind::Basic {
                compare_basic(new_val, old_val)
            } else {
                ChangeMode::Equal
            }
        }
    }
}
