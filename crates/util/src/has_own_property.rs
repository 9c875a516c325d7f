use serde_json::{Map, Value};

/// Check if a JSON object has an own property with the given key.
///
/// Key membership only; the stored value (including an explicit null)
/// plays no part.
///
/// # Examples
///
/// ```
/// use serde_json::Map;
/// use litepatch_util::has_own_property::has_own_property;
///
/// let mut map = Map::new();
/// map.insert("foo".to_string(), serde_json::json!(1));
/// map.insert("nil".to_string(), serde_json::Value::Null);
///
/// assert!(has_own_property(&map, "foo"));
/// assert!(has_own_property(&map, "nil"));
/// assert!(!has_own_property(&map, "baz"));
/// ```
pub fn has_own_property(obj: &Map<String, Value>, key: &str) -> bool {
    obj.contains_key(key)
}
