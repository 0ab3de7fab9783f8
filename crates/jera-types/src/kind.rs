//! Structural classification of JSON values.

use serde_json::Value;

/// The structural kind of a JSON value.
///
/// Classification is purely structural: every leaf value (null, boolean,
/// number, string) is `Basic`, regardless of its primitive type. Only the
/// two container shapes are distinguished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// A leaf value: null, boolean, number, or string.
    Basic,
    /// A key-value mapping.
    Object,
    /// An ordered sequence.
    Array,
}

impl ValueKind {
    /// Returns `true` if this kind can hold child properties.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

/// Classify a JSON value by its structural kind.
pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Object(_) => ValueKind::Object,
        Value::Array(_) => ValueKind::Array,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueKind::Basic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaves_are_basic() {
        assert_eq!(value_kind(&json!(null)), ValueKind::Basic);
        assert_eq!(value_kind(&json!(true)), ValueKind::Basic);
        assert_eq!(value_kind(&json!(42)), ValueKind::Basic);
        assert_eq!(value_kind(&json!(1.5)), ValueKind::Basic);
        assert_eq!(value_kind(&json!("text")), ValueKind::Basic);
    }

    #[test]
    fn containers_are_distinguished() {
        assert_eq!(value_kind(&json!({})), ValueKind::Object);
        assert_eq!(value_kind(&json!([])), ValueKind::Array);
        assert_eq!(value_kind(&json!({"a": [1]})), ValueKind::Object);
    }

    #[test]
    fn container_predicate() {
        assert!(ValueKind::Object.is_container());
        assert!(ValueKind::Array.is_container());
        assert!(!ValueKind::Basic.is_container());
    }
}
