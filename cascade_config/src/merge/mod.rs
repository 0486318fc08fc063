//! Structural deep merge of two configuration trees.

use serde_json::{Map, Value};

use crate::error::{CascadeError, CascadeResult, DottedPath, value_kind};

/// Merges two trees into a fresh one, enforcing shape compatibility.
///
/// Neither input is mutated and the output aliases neither input: every
/// container copied into the result is an independent copy, so callers may
/// freely mutate the inputs afterwards. Per position, the rules are:
///
/// - mapping + mapping: the key union; keys present on both sides merge
///   recursively, one-sided keys are copied unchanged;
/// - sequence + sequence: lengths must match, every element must be a
///   mapping, and elements merge pairwise by position (empty + empty is an
///   empty sequence);
/// - anything else fails, including two scalars — merge never arbitrates
///   between two concrete leaf values, even equal ones.
///
/// # Errors
///
/// Returns [`CascadeError::LengthMismatch`], [`CascadeError::NotAMapping`]
/// or [`CascadeError::KindMismatch`], each naming the dotted path from the
/// merge root to the offending node.
///
/// # Examples
///
/// ```
/// use cascade_config::deep_merge;
/// use serde_json::json;
///
/// let left = json!({"db": {"host": "localhost"}});
/// let right = json!({"db": {"port": 5432}});
/// let merged = deep_merge(&left, &right)?;
/// assert_eq!(merged, json!({"db": {"host": "localhost", "port": 5432}}));
/// # Ok::<(), cascade_config::CascadeError>(())
/// ```
pub fn deep_merge(left: &Value, right: &Value) -> CascadeResult<Value> {
    merge_at(left, right, &DottedPath::root())
}

fn merge_at(left: &Value, right: &Value, path: &DottedPath) -> CascadeResult<Value> {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => merge_mappings(l, r, path),
        (Value::Array(l), Value::Array(r)) => merge_sequences(l, r, path),
        _ => Err(CascadeError::KindMismatch {
            path: path.render(),
            left: value_kind(left),
            right: value_kind(right),
        }),
    }
}

/// Left-side keys first (merged where the right side also has them), then
/// right-only keys, preserving each side's insertion order.
fn merge_mappings(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &DottedPath,
) -> CascadeResult<Value> {
    let mut out = Map::with_capacity(left.len() + right.len());
    for (key, left_value) in left {
        let merged = match right.get(key) {
            Some(right_value) => merge_at(left_value, right_value, &path.child(key))?,
            None => left_value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    for (key, right_value) in right {
        if !left.contains_key(key) {
            out.insert(key.clone(), right_value.clone());
        }
    }
    Ok(Value::Object(out))
}

/// Pairwise positional merge. Length mismatches fail even when one side is
/// empty; there is no empty-list absorption.
fn merge_sequences(left: &[Value], right: &[Value], path: &DottedPath) -> CascadeResult<Value> {
    if left.len() != right.len() {
        return Err(CascadeError::LengthMismatch {
            path: path.render(),
            left: left.len(),
            right: right.len(),
        });
    }
    let mut out = Vec::with_capacity(left.len());
    for (left_item, right_item) in left.iter().zip(right) {
        if !(left_item.is_object() && right_item.is_object()) {
            return Err(CascadeError::NotAMapping {
                path: path.render(),
            });
        }
        out.push(merge_at(left_item, right_item, path)?);
    }
    Ok(Value::Array(out))
}
