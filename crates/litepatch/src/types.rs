//! Operation and error types shared by the diff and patch engines.

use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure of a `test` operation: the document held something other than
/// the expected value.
///
/// Applying a batch stops at the first failed `test`; operations already
/// applied stay applied.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("test failed at {path:?}: expected {expected}, found {actual}")]
pub struct TestFailure {
    /// JSON Pointer of the tested location.
    pub path: String,
    /// The value the operation expected to find.
    pub expected: Value,
    /// The value actually found; `Null` when the location is missing.
    pub actual: Value,
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A single patch operation, RFC 6902 vocabulary.
///
/// `path` and `from` are JSON Pointer strings (RFC 6901); the empty
/// string addresses the document root, and object-key segments carry the
/// `~0`/`~1` escaping of the raw key.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Insert `value` at `path`: arrays splice it in (or append for a
    /// final `-` segment), objects insert or overwrite the key.
    Add { path: String, value: Value },
    /// Delete the value at `path`.
    Remove { path: String },
    /// Overwrite the value at `path` in place.
    Replace { path: String, value: Value },
    /// Relocate the value at `from` to `path`.
    Move { path: String, from: String },
    /// Duplicate the value at `from` into `path`.
    Copy { path: String, from: String },
    /// Assert that the value at `path` deeply equals `value`.
    Test { path: String, value: Value },
}

impl Op {
    /// Returns the operation name as it appears on the wire.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path, .. }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path,
        }
    }
}
