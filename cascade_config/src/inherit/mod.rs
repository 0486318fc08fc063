//! Shared-default inheritance: non-destructive expansion of `_shared`
//! sections into their sibling branches.

use serde_json::Value;
use tracing::{debug, trace};

use crate::SHARED_KEY;
use crate::error::{CascadeError, CascadeResult, DottedPath, value_kind};
use crate::pattern::{PathPattern, Segment, WILDCARD};

/// Applies one default to every location `pattern` designates inside
/// `target`, skipping any location where a value already exists.
///
/// Navigation follows the pattern's dotted segments: a literal segment
/// descends into that field (of a mapping, or of every element of a
/// sequence of mappings), and a wildcard segment fans out over every key of
/// a mapping except [`SHARED_KEY`]. The final segment is the field filled
/// in; setting it is a no-op wherever the field is already present.
///
/// # Errors
///
/// Returns [`CascadeError::TrailingWildcard`] or
/// [`CascadeError::EmptySegment`] for a malformed pattern,
/// [`CascadeError::NotAContainer`] when a target or intermediate node is
/// neither a mapping nor a sequence of mappings, and
/// [`CascadeError::MissingKey`] when a literal segment names a field absent
/// from an intermediate mapping (missing intermediates are never created
/// implicitly). `target` may have been partially updated when an error is
/// returned.
///
/// # Examples
///
/// ```
/// use cascade_config::apply_default;
/// use serde_json::json;
///
/// let mut tree = json!({
///     "dev": {"memory": 8},
///     "prod": {},
/// });
/// apply_default("*.memory", &json!(2), &mut tree)?;
/// assert_eq!(tree, json!({
///     "dev": {"memory": 8},
///     "prod": {"memory": 2},
/// }));
/// # Ok::<(), cascade_config::CascadeError>(())
/// ```
pub fn apply_default(pattern: &str, value: &Value, target: &mut Value) -> CascadeResult<()> {
    let parsed = PathPattern::parse(pattern)?;
    apply_nav(
        parsed.navigation(),
        parsed.leaf(),
        value,
        target,
        &DottedPath::root(),
    )
}

/// Expands and removes every shared section reachable from `root`,
/// returning the resolved tree. The input is never mutated; this is the
/// atomic counterpart of [`resolve_in_place`].
///
/// # Errors
///
/// Propagates every error [`resolve_in_place`] can produce; on failure the
/// partially resolved clone is discarded and `root` is untouched.
///
/// # Examples
///
/// ```
/// use cascade_config::resolve;
/// use serde_json::json;
///
/// let tree = json!({"_shared": {"*.k": "v"}, "a": {}});
/// assert_eq!(resolve(&tree)?, json!({"a": {"k": "v"}}));
/// # Ok::<(), cascade_config::CascadeError>(())
/// ```
pub fn resolve(root: &Value) -> CascadeResult<Value> {
    let mut out = root.clone();
    resolve_in_place(&mut out)?;
    Ok(out)
}

/// Expands and removes every shared section reachable from `root`, mutating
/// the tree in place.
///
/// Descendant mappings (including mapping elements of sequences) are
/// resolved first, so a default declared on a descendant is already
/// concrete — and therefore never overwritten — by the time an ancestor's
/// shared section reaches the same field. Within one shared section,
/// entries apply in field-insertion order.
///
/// Callers must guarantee exclusive access to `root` for the duration of
/// the call; prefer [`resolve`] when atomicity on failure is required, as a
/// failed in-place resolution leaves earlier-resolved sections expanded.
///
/// # Errors
///
/// Returns [`CascadeError::SharedNotAMapping`] when a shared section's
/// value is not a mapping, plus everything [`apply_default`] can return for
/// the section's entries.
pub fn resolve_in_place(root: &mut Value) -> CascadeResult<()> {
    let maybe_shared = {
        let Value::Object(map) = &mut *root else {
            return Ok(());
        };
        for (key, child) in map.iter_mut() {
            if key == SHARED_KEY {
                continue;
            }
            match child {
                Value::Object(_) => resolve_in_place(child)?,
                Value::Array(items) => {
                    for item in items.iter_mut().filter(|item| item.is_object()) {
                        resolve_in_place(item)?;
                    }
                }
                _ => {}
            }
        }
        // shift_remove keeps the surviving siblings in insertion order.
        map.shift_remove(SHARED_KEY)
    };
    let Some(shared) = maybe_shared else {
        return Ok(());
    };
    let shared_kind = value_kind(&shared);
    let Value::Object(rules) = shared else {
        return Err(CascadeError::SharedNotAMapping { kind: shared_kind });
    };
    debug!(rules = rules.len(), "expanding shared section");
    for (raw, default) in &rules {
        trace!(pattern = %raw, "applying shared default");
        apply_default(raw, default, root)?;
    }
    Ok(())
}

fn apply_nav(
    nav: &[Segment],
    leaf: &str,
    value: &Value,
    node: &mut Value,
    path: &DottedPath,
) -> CascadeResult<()> {
    let Some((head, rest)) = nav.split_first() else {
        return fill_leaf(leaf, value, node, path);
    };
    match head {
        Segment::Wildcard => {
            let Value::Object(map) = node else {
                return Err(not_a_container(path, WILDCARD));
            };
            let hop = path.child(WILDCARD);
            for (key, child) in map.iter_mut() {
                if key != SHARED_KEY {
                    apply_nav(rest, leaf, value, child, &hop)?;
                }
            }
            Ok(())
        }
        Segment::Key(field) => descend_field(field, rest, leaf, value, node, path),
    }
}

fn descend_field(
    field: &str,
    rest: &[Segment],
    leaf: &str,
    value: &Value,
    node: &mut Value,
    path: &DottedPath,
) -> CascadeResult<()> {
    let hop = path.child(field);
    match node {
        Value::Object(map) => {
            let Some(child) = map.get_mut(field) else {
                return Err(missing_key(path, field));
            };
            apply_nav(rest, leaf, value, child, &hop)
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                let Value::Object(map) = item else {
                    return Err(not_a_container(path, field));
                };
                let Some(child) = map.get_mut(field) else {
                    return Err(missing_key(path, field));
                };
                apply_nav(rest, leaf, value, child, &hop)?;
            }
            Ok(())
        }
        _ => Err(not_a_container(path, field)),
    }
}

/// Sets `field` to `value` where absent. A sequence target fills every
/// element, each of which must be a mapping.
fn fill_leaf(field: &str, value: &Value, node: &mut Value, path: &DottedPath) -> CascadeResult<()> {
    match node {
        Value::Object(map) => {
            if !map.contains_key(field) {
                map.insert(field.to_owned(), value.clone());
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                let Value::Object(map) = item else {
                    return Err(not_a_container(path, field));
                };
                if !map.contains_key(field) {
                    map.insert(field.to_owned(), value.clone());
                }
            }
            Ok(())
        }
        _ => Err(not_a_container(path, field)),
    }
}

fn not_a_container(path: &DottedPath, field: &str) -> CascadeError {
    CascadeError::NotAContainer {
        path: path.render(),
        field: field.to_owned(),
    }
}

fn missing_key(path: &DottedPath, field: &str) -> CascadeError {
    CascadeError::MissingKey {
        path: path.render(),
        field: field.to_owned(),
    }
}
