//! Structural diff between two JSON values.

use serde_json::Value;

use litepatch_json_pointer::escape_component;
use litepatch_util::has_own_property;

use crate::types::Op;

const STACK_CAPACITY: usize = 64;

/// A pending comparison: one node pair and the pointer addressing it.
struct Frame<'a> {
    origin: &'a Value,
    destination: &'a Value,
    path: String,
}

fn is_container(val: &Value) -> bool {
    matches!(val, Value::Array(_) | Value::Object(_))
}

/// Identity check used while walking: the same allocation, or two equal
/// scalars. Containers never compare structurally here; they either alias
/// or get their own frame.
fn same_node(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    !is_container(a) && !is_container(b) && a == b
}

/// Computes a batch of operations that transforms `origin` into
/// `destination`.
///
/// The walk is iterative over an explicit stack and compares values
/// position by position and key by key; it is a fast structural diff, not
/// a minimal edit script, so reordered array elements come out as
/// replaces rather than moves. Applying the batch to a clone of `origin`
/// with [`patch`](crate::patch::patch) yields a value deeply equal to
/// `destination`.
///
/// Array shrinkage is emitted at descending indices, so an earlier remove
/// is never displaced by a later one. Growth leads with the top index and
/// continues ascending from the old length; applied left to right, the
/// lead add lands as an append and the rest insert ahead of it, rebuilding
/// the destination tail in order.
pub fn diff(origin: &Value, destination: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    if same_node(origin, destination) {
        return ops;
    }

    let mut stack: Vec<Frame> = Vec::with_capacity(STACK_CAPACITY);
    stack.push(Frame {
        origin,
        destination,
        path: String::new(),
    });

    while let Some(Frame {
        origin,
        destination,
        path,
    }) = stack.pop()
    {
        match (origin, destination) {
            (Value::Array(o), Value::Array(d)) => {
                if d.len() > o.len() {
                    // The lead add lands as an append; the remaining new
                    // indices then insert at their final positions ahead
                    // of it.
                    let top = d.len() - 1;
                    ops.push(Op::Add {
                        path: format!("{path}/{top}"),
                        value: d[top].clone(),
                    });
                    for i in o.len()..top {
                        ops.push(Op::Add {
                            path: format!("{path}/{i}"),
                            value: d[i].clone(),
                        });
                    }
                }
                for i in (d.len()..o.len()).rev() {
                    ops.push(Op::Remove {
                        path: format!("{path}/{i}"),
                    });
                }
                let shared = o.len().min(d.len());
                for i in (0..shared).rev() {
                    if same_node(&o[i], &d[i]) {
                        continue;
                    }
                    if is_container(&o[i]) && is_container(&d[i]) {
                        stack.push(Frame {
                            origin: &o[i],
                            destination: &d[i],
                            path: format!("{path}/{i}"),
                        });
                    } else {
                        ops.push(Op::Replace {
                            path: format!("{path}/{i}"),
                            value: d[i].clone(),
                        });
                    }
                }
            }
            (Value::Object(o), Value::Object(d)) => {
                for (key, value) in o {
                    let child = format!("{path}/{}", escape_component(key));
                    match d.get(key) {
                        None => ops.push(Op::Remove { path: child }),
                        Some(dest) => {
                            if same_node(value, dest) {
                                continue;
                            }
                            if is_container(value) && is_container(dest) {
                                stack.push(Frame {
                                    origin: value,
                                    destination: dest,
                                    path: child,
                                });
                            } else {
                                ops.push(Op::Replace {
                                    path: child,
                                    value: dest.clone(),
                                });
                            }
                        }
                    }
                }
                for (key, value) in d {
                    if !has_own_property(o, key) {
                        ops.push(Op::Add {
                            path: format!("{path}/{}", escape_component(key)),
                            value: value.clone(),
                        });
                    }
                }
            }
            // Scalars and mismatched kinds: swap the whole node
            _ => {
                ops.push(Op::Replace {
                    path,
                    value: destination.clone(),
                });
            }
        }
    }

    ops
}
