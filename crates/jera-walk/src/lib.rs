//! Lockstep pair traversal over two JSON value trees.
//!
//! [`visit_pairs`] walks a new and an old document together, visiting every
//! path that exists in the *union* of both trees' property names. Each side
//! is passed to the callback as an `Option<&Value>`, where `None` means the
//! property is absent from that tree. Absence is distinct from the property
//! holding JSON `null`.
//!
//! The walker visits a path before its children, visits every property
//! exactly once, and only descends where the callback returns `true`.
//! Sibling order is unspecified but deterministic for a given input: the
//! new tree's names in map or index order, then names only the old tree has.

use std::collections::HashSet;

use serde_json::Value;

/// Walk the union of two JSON trees, starting at `start_path`.
///
/// The callback receives the full path from the original root, the value at
/// that path in the new tree (or `None` if absent), and the value in the old
/// tree (or `None` if absent). The starting path itself is visited first;
/// children are visited only where the callback returns `true`.
///
/// Array elements are visited under their decimal index (`"0"`, `"1"`, …),
/// so the union of an object and an array is the union of the object's keys
/// and the array's index names. Basic values have no children.
pub fn visit_pairs<F>(start_path: &[String], new: Option<&Value>, old: Option<&Value>, visit: &mut F)
where
    F: FnMut(&[String], Option<&Value>, Option<&Value>) -> bool,
{
    let mut path = start_path.to_vec();
    visit_node(&mut path, new, old, visit);
}

fn visit_node<F>(path: &mut Vec<String>, new: Option<&Value>, old: Option<&Value>, visit: &mut F)
where
    F: FnMut(&[String], Option<&Value>, Option<&Value>) -> bool,
{
    if !visit(path, new, old) {
        return;
    }
    for name in union_child_names(new, old) {
        let new_child = child_value(new, &name);
        let old_child = child_value(old, &name);
        path.push(name);
        visit_node(path, new_child, old_child, visit);
        path.pop();
    }
}

/// Look up a named child of a value. Array children are addressed by their
/// decimal index; anything else has no children.
fn child_value<'a>(value: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    match value {
        Some(Value::Object(map)) => map.get(name),
        Some(Value::Array(items)) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// The property names a single value contributes to the union.
fn child_names(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Union of both sides' property names: the new tree's names first, then the
/// names only the old tree has.
fn union_child_names(new: Option<&Value>, old: Option<&Value>) -> Vec<String> {
    let mut names = child_names(new);
    let seen: HashSet<String> = names.iter().cloned().collect();
    for name in child_names(old) {
        if !seen.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Collect every visited path along with which sides were present.
    fn collect_paths(new: &Value, old: &Value) -> Vec<(Vec<String>, bool, bool)> {
        let mut visited = Vec::new();
        visit_pairs(&[], Some(new), Some(old), &mut |path, n, o| {
            visited.push((path.to_vec(), n.is_some(), o.is_some()));
            true
        });
        visited
    }

    #[test]
    fn root_is_visited_first() {
        let doc = json!({"a": 1});
        let visited = collect_paths(&doc, &doc);
        assert_eq!(visited[0].0, Vec::<String>::new());
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn union_covers_both_sides() {
        let new = json!({"shared": 1, "only_new": 2});
        let old = json!({"shared": 0, "only_old": 3});
        let visited = collect_paths(&new, &old);

        // Root plus three distinct property names, each exactly once.
        assert_eq!(visited.len(), 4);
        let lookup = |name: &str| {
            visited
                .iter()
                .find(|(path, _, _)| path == &vec![name.to_string()])
                .expect("property visited")
        };
        assert_eq!((lookup("shared").1, lookup("shared").2), (true, true));
        assert_eq!((lookup("only_new").1, lookup("only_new").2), (true, false));
        assert_eq!((lookup("only_old").1, lookup("only_old").2), (false, true));
    }

    #[test]
    fn arrays_are_visited_by_index_name() {
        let new = json!([10, 20]);
        let old = json!([10, 20, 30, 40]);
        let visited = collect_paths(&new, &old);

        assert_eq!(visited.len(), 5);
        assert_eq!(visited[1].0, vec!["0".to_string()]);
        // Indexes past the new array's length come from the old side only.
        let (_, has_new, has_old) = &visited[4];
        assert_eq!(visited[4].0, vec!["3".to_string()]);
        assert!(!has_new);
        assert!(*has_old);
    }

    #[test]
    fn object_and_array_union() {
        let new = json!({"a": 1});
        let old = json!([true]);
        let visited = collect_paths(&new, &old);

        assert_eq!(visited.len(), 3);
        assert!(visited
            .iter()
            .any(|(path, n, o)| path == &vec!["a".to_string()] && *n && !*o));
        assert!(visited
            .iter()
            .any(|(path, n, o)| path == &vec!["0".to_string()] && !*n && *o));
    }

    #[test]
    fn basics_have_no_children() {
        let visited = collect_paths(&json!(42), &json!("text"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn returning_false_stops_descent() {
        let doc = json!({"a": {"deep": {"deeper": 1}}});
        let mut count = 0;
        visit_pairs(&[], Some(&doc), Some(&doc), &mut |path, _, _| {
            count += 1;
            path.len() < 1
        });
        // Root and "a" are visited; "a" refuses descent.
        assert_eq!(count, 2);
    }

    #[test]
    fn start_path_prefixes_every_visit() {
        let start = vec!["outer".to_string()];
        let doc = json!({"inner": 1});
        let mut paths = Vec::new();
        visit_pairs(&start, Some(&doc), Some(&doc), &mut |path, _, _| {
            paths.push(path.to_vec());
            true
        });
        assert_eq!(paths[0], vec!["outer".to_string()]);
        assert_eq!(paths[1], vec!["outer".to_string(), "inner".to_string()]);
    }

    #[test]
    fn absent_old_side_yields_none() {
        let new = json!({"a": null});
        let mut saw_null_with_absent_old = false;
        visit_pairs(&[], Some(&new), None, &mut |path, n, o| {
            if path.len() == 1 {
                // JSON null is a present value; absence is None.
                saw_null_with_absent_old = n == Some(&Value::Null) && o.is_none();
            }
            true
        });
        assert!(saw_null_with_absent_old);
    }
}
