//! Diagnostic helpers shared by both engines.

use serde_json::Value;

/// Dotted path from an operation's root, tracked purely for error messages.
///
/// The root renders as `.`; descending into key `k` appends `.k`. Wildcard
/// hops record the literal `*` token so messages mirror the pattern that
/// drove the traversal.
#[derive(Clone, Debug, Default)]
pub(crate) struct DottedPath(String);

impl DottedPath {
    /// Path of the operation's root node.
    pub(crate) const fn root() -> Self {
        Self(String::new())
    }

    /// Path of the child reached through `segment`.
    pub(crate) fn child(&self, segment: &str) -> Self {
        let mut buf = String::with_capacity(self.0.len() + segment.len() + 1);
        buf.push_str(&self.0);
        buf.push('.');
        buf.push_str(segment);
        Self(buf)
    }

    /// Renders the path for an error message, with a leading dot.
    pub(crate) fn render(&self) -> String {
        if self.0.is_empty() {
            ".".to_owned()
        } else {
            self.0.clone()
        }
    }
}

/// Human-readable kind name for a tree node.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(..) => "boolean",
        Value::Number(..) => "number",
        Value::String(..) => "string",
        Value::Array(..) => "sequence",
        Value::Object(..) => "mapping",
    }
}
