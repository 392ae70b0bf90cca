//! Identifier and score types
//!
//! - DocId: opaque document identifier (typically a URL)
//! - Score: integer relevance weight
//! - combine_relevance: the single rule used to accumulate relevance

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Relevance score
///
/// Scores coming out of an index are raw term counts and therefore
/// non-negative. Caller-built sets may carry negative values; they are
/// accepted as-is.
pub type Score = i64;

/// Combine two relevance scores
///
/// Relevance is additive term frequency. Saturates at the `i64` bounds.
///
/// # Example
///
/// ```
/// use wikisearch_core::combine_relevance;
///
/// assert_eq!(combine_relevance(3, 2), 5);
/// assert_eq!(combine_relevance(i64::MAX, 1), i64::MAX);
/// ```
#[inline]
pub fn combine_relevance(a: Score, b: Score) -> Score {
    a.saturating_add(b)
}

// ============================================================================
// DocId
// ============================================================================

/// Opaque identifier of an indexed document
///
/// Ordered byte-wise so that sets iterate deterministically.
/// Borrows as `str`, so maps keyed by `DocId` can be queried with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a new DocId
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    /// View as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        DocId(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        DocId(s)
    }
}

impl From<&String> for DocId {
    fn from(s: &String) -> Self {
        DocId(s.clone())
    }
}
