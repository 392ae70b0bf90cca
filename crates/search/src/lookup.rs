//! Index lookup collaborator interface
//!
//! The inverted index itself lives outside this crate. Everything the
//! evaluator needs from it is a single operation: term in, scored set out.

use std::sync::Arc;
use wikisearch_core::{Result, ScoredResultSet};

/// Pluggable index lookup
///
/// Given a term, returns every document containing it, scored by the raw
/// term frequency in that document. An unknown term yields an empty set.
///
/// # Errors
///
/// If the backing store is unreachable or corrupt, implementations return
/// `Error::IndexUnavailable`. Callers propagate it unchanged; a failed
/// lookup must never be treated as "term not found".
///
/// # Thread Safety
///
/// Lookups must be Send + Sync so one index can serve concurrent queries.
pub trait IndexLookup: Send + Sync {
    /// Look up the documents containing `term`
    fn lookup(&self, term: &str) -> Result<ScoredResultSet>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

impl<T: IndexLookup + ?Sized> IndexLookup for &T {
    fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
        (**self).lookup(term)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: IndexLookup + ?Sized> IndexLookup for Arc<T> {
    fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
        (**self).lookup(term)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: IndexLookup + ?Sized> IndexLookup for Box<T> {
    fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
        (**self).lookup(term)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikisearch_core::Error;

    struct Fixed;

    impl IndexLookup for Fixed {
        fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
            match term {
                "down" => Err(Error::index_unavailable(term, "offline")),
                _ => Ok([("wiki/Fixed", 1)].into_iter().collect()),
            }
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn lookup_through<L: IndexLookup>(index: L, term: &str) -> Result<ScoredResultSet> {
        index.lookup(term)
    }

    #[test]
    fn test_blanket_impls_delegate() {
        assert_eq!(lookup_through(&Fixed, "x").unwrap().len(), 1);
        assert_eq!(lookup_through(Arc::new(Fixed), "x").unwrap().len(), 1);
        assert_eq!(lookup_through(Box::new(Fixed), "x").unwrap().len(), 1);
    }

    #[test]
    fn test_trait_object_name() {
        let index: Arc<dyn IndexLookup> = Arc::new(Fixed);
        assert_eq!(index.name(), "fixed");
    }

    #[test]
    fn test_errors_pass_through_wrappers() {
        let index: Box<dyn IndexLookup> = Box::new(Fixed);
        let err = lookup_through(&index, "down").unwrap_err();
        assert!(err.is_index_unavailable());
    }
}
