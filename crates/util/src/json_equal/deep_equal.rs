use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// Arrays are compared element by element, objects key by key with no
/// regard for key order, and everything else by plain value equality.
/// Note that integer and float representations of the same quantity are
/// distinct values: `1` does not equal `1.0`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use litepatch_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3]});
/// let b = json!({"foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        // Scalars, and mismatched kinds, which are never equal
        _ => a == b,
    }
}
