//! JSON Pointer (RFC 6901) utilities.
//!
//! Helper functions for [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! strings: escaping of individual path components, conversion between
//! pointer strings and segment lists, and value resolution against a
//! `serde_json::Value` tree.
//!
//! # Example
//!
//! ```
//! use litepatch_json_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! // Resolve a value in a JSON document
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! let val = get(&doc, &path);
//! assert_eq!(val, Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use litepatch_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use litepatch_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0, or "~01" decodes wrong
    component.replace("~1", "/").replace("~0", "~")
}

/// Parse a JSON Pointer string into unescaped path components.
///
/// - The empty string is the root pointer and returns an empty vec
/// - The leading `/` is stripped
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use litepatch_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// Every component is escaped; the root path (no components) formats as
/// the empty string. Inverse of [`parse_json_pointer`].
///
/// # Example
///
/// ```
/// use litepatch_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string()]), "/foo");
/// assert_eq!(
///     format_json_pointer(&["a~b".to_string(), "c/d".to_string()]),
///     "/a~0b/c~1d"
/// );
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path does not resolve: a missing key, an index
/// past the end, an unparsable index, the `-` marker, or an attempt to
/// step into a scalar.
///
/// # Example
///
/// ```
/// use litepatch_json_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
/// assert_eq!(val, Some(&json!(42)));
///
/// let missing = get(&doc, &["missing".to_string()]);
/// assert_eq!(missing, None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for component in path {
        match current {
            Value::Array(arr) => {
                // "-" addresses the slot past the end; nothing lives there
                if component == "-" {
                    return None;
                }
                let idx: usize = component.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(component)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Resolution rules match [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for component in path {
        match current {
            Value::Array(arr) => {
                if component == "-" {
                    return None;
                }
                let idx: usize = component.parse().ok()?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                current = map.get_mut(component)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
