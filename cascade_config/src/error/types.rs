//! Primary error enum for tree resolution failures.

use thiserror::Error;

/// Convenience alias for fallible tree operations.
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Errors that can occur while merging trees or resolving inheritance.
///
/// Every variant reporting a tree position carries the dotted path from the
/// operation's root to the offending node, rendered with a leading `.` (the
/// root itself renders as `.`, a nested node as e.g. `.env.databases`).
/// All failures are terminal for the operation that raised them; no partial
/// recovery is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CascadeError {
    /// A path pattern's final segment is the wildcard token, so it names a
    /// container rather than a field and cannot designate a target.
    #[error("path pattern '{pattern}' must not end with the wildcard token")]
    TrailingWildcard {
        /// The rejected pattern, verbatim.
        pattern: String,
    },

    /// A path pattern is empty or contains an empty segment (`a..b`, `.a`).
    #[error("path pattern '{pattern}' contains an empty segment")]
    EmptySegment {
        /// The rejected pattern, verbatim.
        pattern: String,
    },

    /// Two sequences at the same position have different lengths, so their
    /// elements cannot be paired positionally.
    #[error("sequence length mismatch at '{path}': left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Dotted path to the mismatched sequences.
        path: String,
        /// Element count of the left-hand sequence.
        left: usize,
        /// Element count of the right-hand sequence.
        right: usize,
    },

    /// A sequence element that positional merging requires to be a mapping
    /// is something else.
    #[error("sequence elements at '{path}' are not mappings")]
    NotAMapping {
        /// Dotted path to the sequence holding the offending element.
        path: String,
    },

    /// Two nodes at the same position cannot be combined: scalars never
    /// merge (even when equal), and container kinds must match.
    #[error("cannot merge {left} with {right} at '{path}'")]
    KindMismatch {
        /// Dotted path to the conflicting pair.
        path: String,
        /// Kind of the left-hand node.
        left: &'static str,
        /// Kind of the right-hand node.
        right: &'static str,
    },

    /// A default targeted a node that is neither a mapping nor a sequence
    /// of mappings, so the field cannot be set or navigated.
    #[error(
        "node at '{path}' is not a mapping or a sequence of mappings; cannot apply field '{field}'"
    )]
    NotAContainer {
        /// Dotted path to the offending node.
        path: String,
        /// Field the operation attempted to set or traverse.
        field: String,
    },

    /// A literal path segment names a field absent from the mapping (or
    /// sequence element) being navigated. Missing intermediate fields are a
    /// hard error; they are never created implicitly.
    #[error("field '{field}' is missing at '{path}'")]
    MissingKey {
        /// Dotted path to the mapping that lacks the field.
        path: String,
        /// The absent field name.
        field: String,
    },

    /// A shared section's value is not a mapping of pattern to default.
    #[error("shared section must be a mapping, found {kind}")]
    SharedNotAMapping {
        /// Kind of the value found under the reserved key.
        kind: &'static str,
    },
}
