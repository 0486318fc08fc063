//! Core crate for resolving layered configuration trees.
//!
//! Two independent operations work over the same JSON-like data model
//! ([`serde_json::Value`]):
//!
//! - [`deep_merge`] structurally combines two trees into a fresh one,
//!   enforcing shape compatibility and never dropping a value.
//! - [`resolve`] (and its in-place variant [`resolve_in_place`]) expands
//!   every shared-defaults section in a tree into its sibling branches,
//!   without ever overwriting an explicitly set value, then strips the
//!   section from the output.
//!
//! Callers parse source documents into [`serde_json::Value`] and serialise
//! results back out themselves; this crate performs no I/O.
//!
//! # The pattern mini-language
//!
//! Shared-defaults sections live under the reserved mapping key
//! [`SHARED_KEY`] (`"_shared"`) and map dot-separated path patterns to
//! default values. A pattern segment is either a literal field name or the
//! wildcard token [`WILDCARD`] (`"*"`), which matches every sibling key at
//! that level except the shared section itself. The final segment names the
//! field to fill in and must be a literal. These two tokens are the only
//! magic in the mini-language; see [`PathPattern`] for the full syntax
//! contract.
//!
//! # Examples
//!
//! ```
//! use cascade_config::resolve;
//! use serde_json::json;
//!
//! let tree = json!({
//!     "_shared": {"*.username": "root", "*.memory": 2},
//!     "dev": {"password": "dev123"},
//!     "prod": {"password": "prod456", "memory": 8},
//! });
//! let resolved = resolve(&tree)?;
//! assert_eq!(resolved, json!({
//!     "dev": {"password": "dev123", "username": "root", "memory": 2},
//!     "prod": {"password": "prod456", "memory": 8, "username": "root"},
//! }));
//! # Ok::<(), cascade_config::CascadeError>(())
//! ```

mod error;
mod inherit;
mod merge;
mod pattern;

pub use error::{CascadeError, CascadeResult};
pub use inherit::{apply_default, resolve, resolve_in_place};
pub use merge::deep_merge;
pub use pattern::{PathPattern, Segment, WILDCARD};

/// Reserved mapping key that holds a shared-defaults section.
///
/// The value under this key must itself be a mapping of path pattern to
/// default value. The key is metadata: inheritance resolution removes it
/// from the tree, and wildcard segments never descend into it.
pub const SHARED_KEY: &str = "_shared";
