//! In-memory index lookup
//!
//! This module provides:
//! - MemoryIndex: term -> (DocId -> count) table implementing IndexLookup
//! - Availability toggle to simulate an unreachable store
//! - Version watermark bumped on every mutation
//!
//! MemoryIndex holds counts that were computed elsewhere. It does not
//! tokenize or crawl anything; it stands in for the external key-value
//! store behind the real index.

use crate::lookup::IndexLookup;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use wikisearch_core::{combine_relevance, DocId, Error, Result, Score, ScoredResultSet};

/// Concurrent in-memory term count table
///
/// # Thread Safety
///
/// Uses DashMap for concurrent access. Multiple readers/writers supported.
///
/// # Availability
///
/// While unavailable, every lookup fails with `IndexUnavailable`. Stored
/// counts are kept and served again once the index is marked available.
pub struct MemoryIndex {
    /// Term -> postings (DocId -> count)
    postings: DashMap<String, BTreeMap<DocId, Score>>,

    /// Whether lookups are served
    available: AtomicBool,

    /// Version watermark, incremented on every update
    version: AtomicU64,
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIndex {
    /// Create a new, empty, available index
    pub fn new() -> Self {
        MemoryIndex {
            postings: DashMap::new(),
            available: AtomicBool::new(true),
            version: AtomicU64::new(0),
        }
    }

    // ========================================================================
    // Availability
    // ========================================================================

    /// Check if lookups are currently served
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Mark the index reachable or unreachable
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
        tracing::debug!(
            target: "wikisearch::index",
            available,
            "Memory index availability changed"
        );
    }

    // ========================================================================
    // Version Watermark
    // ========================================================================

    /// Get current version
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    fn bump_version(&self) {
        self.version.fetch_add(1, Ordering::Release);
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace all counts for `term`
    pub fn set_counts<K, I>(&self, term: impl Into<String>, counts: I)
    where
        K: Into<DocId>,
        I: IntoIterator<Item = (K, Score)>,
    {
        let set: ScoredResultSet = counts.into_iter().collect();
        self.postings.insert(term.into(), set.into_inner());
        self.bump_version();
    }

    /// Add `count` occurrences of `term` in `doc_id`
    pub fn add_count(&self, term: &str, doc_id: impl Into<DocId>, count: Score) {
        self.postings
            .entry(term.to_string())
            .or_default()
            .entry(doc_id.into())
            .and_modify(|existing| *existing = combine_relevance(*existing, count))
            .or_insert(count);
        self.bump_version();
    }

    /// Remove a term and its postings, returning how many documents it had
    pub fn remove_term(&self, term: &str) -> usize {
        let removed = self
            .postings
            .remove(term)
            .map(|(_, postings)| postings.len())
            .unwrap_or(0);
        self.bump_version();
        removed
    }

    /// Clear all terms
    ///
    /// Does NOT change availability.
    pub fn clear(&self) {
        self.postings.clear();
        self.bump_version();
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents containing `term`
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(|p| p.len()).unwrap_or(0)
    }
}

impl IndexLookup for MemoryIndex {
    fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
        if !self.is_available() {
            return Err(Error::index_unavailable(term, "memory index is marked unavailable"));
        }

        Ok(self
            .postings
            .get(term)
            .map(|postings| ScoredResultSet::new(postings.clone()))
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
