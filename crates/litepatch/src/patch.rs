//! In-place application of patch operations.
//!
//! The engine trusts its input: batches are expected to come from
//! [`diff`](crate::diff::diff) or another source that guarantees every
//! path addresses the document it is applied to. Paths that resolve to
//! nothing, unparsable array indices, and navigation into scalars panic
//! rather than returning errors. One out-of-range form is defined rather
//! than rejected: an `add` index past the end of an array appends, which
//! is how the diff engine addresses the lead element of a grown tail.
//! The single recoverable failure is a `test` mismatch, reported as
//! [`TestFailure`].

use serde_json::Value;

use litepatch_json_pointer::{get, get_mut, parse_json_pointer};
use litepatch_util::deep_equal;

use crate::types::{Op, TestFailure};

// ── Path navigation ───────────────────────────────────────────────────────

/// Splits a non-root pointer into parent segments and the final segment.
fn split_parent(path: &str) -> (Vec<String>, String) {
    let mut segments = parse_json_pointer(path);
    let key = segments
        .pop()
        .expect("non-root pointer must have a final segment");
    (segments, key)
}

/// Mutable walk to the parent container of a non-root operation target.
fn parent_mut<'a>(doc: &'a mut Value, segments: &[String]) -> &'a mut Value {
    get_mut(doc, segments).expect("operation path must address an existing location")
}

fn array_index(segment: &str) -> usize {
    segment
        .parse()
        .expect("array path segment must be an index")
}

/// Reads the value at a pointer; a missing location reads as `Null`.
fn read(doc: &Value, pointer: &str) -> Value {
    get(doc, &parse_json_pointer(pointer))
        .cloned()
        .unwrap_or(Value::Null)
}

static NULL: Value = Value::Null;

/// Borrowing variant of [`read`] for `test`, which only needs to look.
fn read_ref<'a>(doc: &'a Value, pointer: &str) -> &'a Value {
    get(doc, &parse_json_pointer(pointer)).unwrap_or(&NULL)
}

// ── Container mutation ────────────────────────────────────────────────────

/// `add` placement: arrays splice the value in (appending for `-` or any
/// index past the end), objects insert or overwrite the key.
fn insert_at(parent: &mut Value, key: String, value: Value) {
    match parent {
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
            } else {
                let idx = array_index(&key).min(arr.len());
                arr.insert(idx, value);
            }
        }
        Value::Object(map) => {
            map.insert(key, value);
        }
        _ => panic!("add target must be a container"),
    }
}

/// `replace`/`move`/`copy` placement: assignment, not insertion. An array
/// slot is overwritten in place and the array never grows; an existing
/// object key keeps its position.
fn assign_at(parent: &mut Value, key: String, value: Value) {
    match parent {
        Value::Array(arr) => {
            let idx = array_index(&key);
            arr[idx] = value;
        }
        Value::Object(map) => {
            map.insert(key, value);
        }
        _ => panic!("assignment target must be a container"),
    }
}

/// Detaches and returns the value at `key`. Later array elements shift
/// down; object removal keeps the remaining keys in insertion order.
fn detach_at(parent: &mut Value, key: &str) -> Value {
    match parent {
        Value::Array(arr) => arr.remove(array_index(key)),
        Value::Object(map) => map.shift_remove(key).expect("removed key must exist"),
        _ => panic!("removal target must be a container"),
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Operations addressed at the document root replace `*doc` wholesale.
fn apply_root(doc: &mut Value, op: &Op) -> Result<(), TestFailure> {
    match op {
        Op::Add { value, .. } | Op::Replace { value, .. } => {
            *doc = value.clone();
        }
        Op::Remove { .. } => {
            *doc = Value::Null;
        }
        // The old root is discarded either way, so move and copy coincide
        Op::Move { from, .. } | Op::Copy { from, .. } => {
            *doc = read(doc, from);
        }
        Op::Test { value, .. } => {
            if !deep_equal(doc, value) {
                return Err(TestFailure {
                    path: String::new(),
                    expected: value.clone(),
                    actual: doc.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Applies one operation to `doc` in place.
///
/// Root-targeting operations overwrite `*doc`; root `remove` leaves
/// `Null` behind. Returns the failing comparison when a `test` does not
/// match; see the module docs for what happens on untrusted paths.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), TestFailure> {
    if op.path().is_empty() {
        return apply_root(doc, op);
    }
    match op {
        Op::Add { path, value } => {
            let (parent_path, key) = split_parent(path);
            insert_at(parent_mut(doc, &parent_path), key, value.clone());
        }
        Op::Remove { path } => {
            let (parent_path, key) = split_parent(path);
            detach_at(parent_mut(doc, &parent_path), &key);
        }
        Op::Replace { path, value } => {
            let (parent_path, key) = split_parent(path);
            assign_at(parent_mut(doc, &parent_path), key, value.clone());
        }
        Op::Move { path, from } => {
            if from != path {
                let (from_parent, from_key) = split_parent(from);
                let value = detach_at(parent_mut(doc, &from_parent), &from_key);
                let (parent_path, key) = split_parent(path);
                assign_at(parent_mut(doc, &parent_path), key, value);
            }
        }
        Op::Copy { path, from } => {
            if from != path {
                let value = read(doc, from);
                let (parent_path, key) = split_parent(path);
                assign_at(parent_mut(doc, &parent_path), key, value);
            }
        }
        Op::Test { path, value } => {
            let actual = read_ref(doc, path);
            if !deep_equal(actual, value) {
                return Err(TestFailure {
                    path: path.clone(),
                    expected: value.clone(),
                    actual: actual.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Applies a batch strictly left to right, each operation seeing the
/// cumulative effect of the ones before it.
///
/// Stops at the first failed `test`; operations already applied are not
/// rolled back.
pub fn patch(doc: &mut Value, ops: &[Op]) -> Result<(), TestFailure> {
    for op in ops {
        apply_op(doc, op)?;
    }
    Ok(())
}
