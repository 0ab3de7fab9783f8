//! Comparison of basic (leaf) JSON values.

use serde_json::{Number, Value};

use crate::change::ChangeMode;
use crate::kind::{value_kind, ValueKind};

/// Compare two basic JSON values: string, number, boolean, or null.
///
/// Both arguments must be [`ValueKind::Basic`]; passing a container is a
/// programming error in the caller. The diff engine guarantees this by
/// classifying kinds before comparing values, and a debug assertion defends
/// the precondition here. In release builds a container argument degrades to
/// an `Updated` classification.
///
/// Numbers are normalized to IEEE-754 double precision before comparison, so
/// `1` and `1.0` compare equal. Integers beyond the exact double range lose
/// precision the same way a double would; this is a documented limitation.
pub fn compare_basic(a: &Value, b: &Value) -> ChangeMode {
    debug_assert!(
        value_kind(a) == ValueKind::Basic && value_kind(b) == ValueKind::Basic,
        "compare_basic requires basic values, got {a:?} and {b:?}"
    );

    let equal = match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => normalize_number(x) == normalize_number(y),
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    };

    if equal {
        ChangeMode::Equal
    } else {
        ChangeMode::Updated
    }
}

/// Normalize a JSON number to double precision. JSON has a single number
/// type, so integer-valued and float-valued representations of the same
/// magnitude must compare equal.
fn normalize_number(n: &Number) -> Option<f64> {
    n.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_equals_null() {
        assert_eq!(compare_basic(&json!(null), &json!(null)), ChangeMode::Equal);
    }

    #[test]
    fn integer_equals_float_of_same_magnitude() {
        assert_eq!(compare_basic(&json!(1), &json!(1.0)), ChangeMode::Equal);
        assert_eq!(compare_basic(&json!(-7), &json!(-7.0)), ChangeMode::Equal);
        assert_eq!(compare_basic(&json!(0), &json!(0.0)), ChangeMode::Equal);
    }

    #[test]
    fn differing_numbers_update() {
        assert_eq!(compare_basic(&json!(1), &json!(2)), ChangeMode::Updated);
        assert_eq!(compare_basic(&json!(1.5), &json!(1.25)), ChangeMode::Updated);
    }

    #[test]
    fn strings_compare_structurally() {
        assert_eq!(compare_basic(&json!("a"), &json!("a")), ChangeMode::Equal);
        assert_eq!(compare_basic(&json!("a"), &json!("b")), ChangeMode::Updated);
    }

    #[test]
    fn booleans_compare_structurally() {
        assert_eq!(compare_basic(&json!(true), &json!(true)), ChangeMode::Equal);
        assert_eq!(compare_basic(&json!(true), &json!(false)), ChangeMode::Updated);
    }

    #[test]
    fn cross_type_basics_update() {
        assert_eq!(compare_basic(&json!(1), &json!("1")), ChangeMode::Updated);
        assert_eq!(compare_basic(&json!(null), &json!(false)), ChangeMode::Updated);
        assert_eq!(compare_basic(&json!(0), &json!(null)), ChangeMode::Updated);
    }

    #[test]
    fn large_integers_compare_at_double_precision() {
        // Both are beyond 2^53 and collapse to the same double.
        let a = json!(9_007_199_254_740_993_u64);
        let b = json!(9_007_199_254_740_992_u64);
        assert_eq!(compare_basic(&a, &b), ChangeMode::Equal);
    }
}
