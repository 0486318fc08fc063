//! The dot-separated path-pattern mini-language.
//!
//! Both engines share this single definition of pattern syntax: a pattern is
//! a sequence of dot-separated segments, each either a literal field name or
//! the wildcard token [`WILDCARD`]. The final segment names the field a
//! default fills in, so it must be a literal; all validation happens at
//! parse time.

use std::fmt;
use std::str::FromStr;

use crate::error::{CascadeError, CascadeResult};

/// The wildcard token: matches every sibling key at one level, except the
/// reserved shared-section key.
pub const WILDCARD: &str = "*";

/// One navigation step of a parsed path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A literal field name.
    Key(String),
    /// The wildcard token (`*`).
    Wildcard,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(name) => f.write_str(name),
            Self::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// A validated path pattern: zero or more navigation segments followed by
/// the leaf field name the pattern targets.
///
/// # Examples
///
/// ```
/// use cascade_config::{PathPattern, Segment};
///
/// let pattern: PathPattern = "*.servers.*.cpu".parse()?;
/// assert_eq!(pattern.leaf(), "cpu");
/// assert_eq!(pattern.navigation().len(), 3);
/// assert!(matches!(pattern.navigation().first(), Some(Segment::Wildcard)));
/// assert_eq!(pattern.to_string(), "*.servers.*.cpu");
/// # Ok::<(), cascade_config::CascadeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    navigation: Vec<Segment>,
    leaf: String,
}

impl PathPattern {
    /// Parses and validates a dotted pattern.
    ///
    /// A field name equal to the wildcard token is always read as a
    /// wildcard; there is no escaping in the mini-language.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::EmptySegment`] when the pattern is empty or
    /// any segment between dots is empty, and
    /// [`CascadeError::TrailingWildcard`] when the final segment is the
    /// wildcard token (the pattern would designate a container, not a
    /// field).
    pub fn parse(raw: &str) -> CascadeResult<Self> {
        let mut segments = Vec::new();
        for part in raw.split('.') {
            if part.is_empty() {
                return Err(CascadeError::EmptySegment {
                    pattern: raw.to_owned(),
                });
            }
            segments.push(if part == WILDCARD {
                Segment::Wildcard
            } else {
                Segment::Key(part.to_owned())
            });
        }
        // `split` yields at least one part, and empty parts were rejected
        // above, so `segments` is non-empty here.
        let Some(Segment::Key(leaf)) = segments.pop() else {
            return Err(CascadeError::TrailingWildcard {
                pattern: raw.to_owned(),
            });
        };
        Ok(Self {
            navigation: segments,
            leaf,
        })
    }

    /// The navigation segments preceding the leaf field name.
    #[must_use]
    pub fn navigation(&self) -> &[Segment] {
        &self.navigation
    }

    /// The field name the pattern targets.
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }
}

impl FromStr for PathPattern {
    type Err = CascadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.navigation {
            write!(f, "{segment}.")?;
        }
        f.write_str(&self.leaf)
    }
}
