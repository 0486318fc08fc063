//! Error types produced by the merge and inheritance engines.

mod diagnostics;
mod types;

pub use types::{CascadeError, CascadeResult};

pub(crate) use diagnostics::{DottedPath, value_kind};
