//! Structural JSON diff and patch.
//!
//! Computes RFC 6902 operation batches describing the difference between
//! two JSON values, and applies such batches in place. Paths are RFC 6901
//! JSON Pointers; object key order is preserved end to end.
//!
//! The diff is a fast structural walk, not a minimal edit script: values
//! are compared position by position and key by key, so array reordering
//! comes out as replaces rather than moves. What it guarantees is the
//! round trip — applying `diff(&a, &b)` to a clone of `a` produces a
//! value deeply equal to `b`.
//!
//! # Operations
//!
//! The standard RFC 6902 vocabulary:
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.
//!
//! Batches apply strictly left to right and stop at the first failed
//! `test`. The patch engine trusts its input otherwise: paths that do not
//! address the document panic instead of returning errors.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let origin = json!({"name": "a", "tags": [1, 2]});
//! let destination = json!({"name": "b", "tags": [1, 2, 3]});
//!
//! let ops = litepatch::diff(&origin, &destination);
//!
//! let mut doc = origin.clone();
//! litepatch::patch(&mut doc, &ops).unwrap();
//! assert_eq!(doc, destination);
//! ```

pub mod codec;
pub mod diff;
pub mod patch;
pub mod types;

pub use codec::{from_json, from_json_patch, to_json, to_json_patch, DecodeError};
pub use diff::diff;
pub use patch::{apply_op, patch};
pub use types::{Op, TestFailure};
