//! JSON wire codec for patch operations.
//!
//! Encodes operations to the RFC 6902 interchange shape
//! `{"op": ..., "path": ..., "value"?: ..., "from"?: ...}` and decodes
//! untrusted JSON back into [`Op`] values.

use serde_json::{json, Value};
use thiserror::Error;

use crate::types::Op;

/// Error produced when operation JSON does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid operation: {0}")]
pub struct DecodeError(pub String);

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an operation to its JSON wire form.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({ "op": "add", "path": path, "value": value }),
        Op::Remove { path } => json!({ "op": "remove", "path": path }),
        Op::Replace { path, value } => json!({ "op": "replace", "path": path, "value": value }),
        Op::Move { path, from } => json!({ "op": "move", "path": path, "from": from }),
        Op::Copy { path, from } => json!({ "op": "copy", "path": path, "from": from }),
        Op::Test { path, value } => json!({ "op": "test", "path": path, "value": value }),
    }
}

/// Serialize a batch to a JSON array of operations.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation from its JSON wire form.
///
/// Unknown fields are ignored; a missing or mistyped required field is a
/// [`DecodeError`].
pub fn from_json(v: &Value) -> Result<Op, DecodeError> {
    let obj = v
        .as_object()
        .ok_or_else(|| DecodeError("operation must be an object".into()))?;
    let op_name = obj
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DecodeError("missing 'op' field".into()))?;
    let path = obj
        .get("path")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DecodeError("missing 'path' field".into()))?
        .to_string();

    let require_value = |field: &str| -> Result<Value, DecodeError> {
        obj.get(field)
            .cloned()
            .ok_or_else(|| DecodeError(format!("{op_name} requires '{field}'")))
    };
    let require_pointer = |field: &str| -> Result<String, DecodeError> {
        obj.get(field)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| DecodeError(format!("{op_name} requires '{field}'")))
    };

    match op_name {
        "add" => Ok(Op::Add {
            path,
            value: require_value("value")?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: require_value("value")?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: require_pointer("from")?,
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: require_pointer("from")?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: require_value("value")?,
        }),
        other => Err(DecodeError(format!("unknown op: {other}"))),
    }
}

/// Deserialize a JSON array into a batch.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, DecodeError> {
    let arr = v
        .as_array()
        .ok_or_else(|| DecodeError("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
