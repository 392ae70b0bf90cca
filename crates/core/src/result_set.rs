//! Scored result sets and their boolean algebra
//!
//! This module provides:
//! - ScoredResultSet: immutable mapping from DocId to relevance score
//! - `or`: score-additive union
//! - `and`: intersection by key membership, scores summed
//! - `minus`: difference by key membership, left scores kept
//!
//! # Invariants
//!
//! - Operators never mutate their operands; each returns a fresh set.
//! - Membership is decided on key sets. `relevance()` defaults missing keys
//!   to 0 and is never used to test presence, so a document stored with
//!   score 0 is still a member.

use crate::ranking::{rank, RankOrder, RankedEntry};
use crate::types::{combine_relevance, DocId, Score};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::{BitAnd, BitOr, Sub};

// ============================================================================
// ScoredResultSet
// ============================================================================

/// Result of a query: documents mapped to relevance scores
///
/// Produced by an index lookup for a single term, or by combining two
/// existing sets. Iterates in ascending `DocId` order.
///
/// # Example
///
/// ```
/// use wikisearch_core::ScoredResultSet;
///
/// let java: ScoredResultSet = [("wiki/Java", 3), ("wiki/C", 1)].into_iter().collect();
/// let programming: ScoredResultSet = [("wiki/Java", 2), ("wiki/Python", 5)].into_iter().collect();
///
/// let both = java.and(&programming);
/// assert_eq!(both.len(), 1);
/// assert_eq!(both.relevance("wiki/Java"), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoredResultSet {
    scores: BTreeMap<DocId, Score>,
}

impl ScoredResultSet {
    /// Wrap an existing mapping
    ///
    /// Scores are not validated; negative values are kept as given.
    pub fn new(scores: BTreeMap<DocId, Score>) -> Self {
        ScoredResultSet { scores }
    }

    /// The empty result set
    pub fn empty() -> Self {
        ScoredResultSet {
            scores: BTreeMap::new(),
        }
    }

    /// Relevance of a document, 0 if absent
    pub fn relevance(&self, doc_id: &str) -> Score {
        self.scores.get(doc_id).copied().unwrap_or(0)
    }

    /// Whether the document is a member of this set
    pub fn contains(&self, doc_id: &str) -> bool {
        self.scores.contains_key(doc_id)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate (doc, score) pairs in ascending DocId order
    pub fn iter(&self) -> impl Iterator<Item = (&DocId, Score)> + '_ {
        self.scores.iter().map(|(doc_id, score)| (doc_id, *score))
    }

    /// Iterate member documents in ascending DocId order
    pub fn doc_ids(&self) -> impl Iterator<Item = &DocId> + '_ {
        self.scores.keys()
    }

    /// Sum of all scores in the set
    pub fn total_relevance(&self) -> Score {
        self.scores
            .values()
            .fold(0, |acc, score| combine_relevance(acc, *score))
    }

    /// Consume and return the underlying mapping
    pub fn into_inner(self) -> BTreeMap<DocId, Score> {
        self.scores
    }

    // ========================================================================
    // Set Algebra
    // ========================================================================

    /// Union: every document in either set, scores summed
    ///
    /// `C[id] = self.relevance(id) + other.relevance(id)` for every id in
    /// either key set. Commutative.
    pub fn or(&self, other: &ScoredResultSet) -> ScoredResultSet {
        let mut scores = self.scores.clone();
        for (doc_id, score) in &other.scores {
            scores
                .entry(doc_id.clone())
                .and_modify(|existing| *existing = combine_relevance(*existing, *score))
                .or_insert(*score);
        }
        ScoredResultSet { scores }
    }

    /// Intersection: documents present in both sets, scores summed
    ///
    /// `A.and(&A)` doubles every score; intersection is not idempotent.
    pub fn and(&self, other: &ScoredResultSet) -> ScoredResultSet {
        // Probe the larger map from the smaller one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let scores = small
            .scores
            .iter()
            .filter_map(|(doc_id, score)| {
                large
                    .scores
                    .get(doc_id)
                    .map(|other_score| (doc_id.clone(), combine_relevance(*score, *other_score)))
            })
            .collect();
        ScoredResultSet { scores }
    }

    /// Difference: documents in `self` absent from `other`, own scores kept
    pub fn minus(&self, other: &ScoredResultSet) -> ScoredResultSet {
        let scores = self
            .scores
            .iter()
            .filter(|(doc_id, _)| !other.scores.contains_key(*doc_id))
            .map(|(doc_id, score)| (doc_id.clone(), *score))
            .collect();
        ScoredResultSet { scores }
    }

    // ========================================================================
    // Ranking
    // ========================================================================

    /// Entries sorted by ascending relevance
    ///
    /// Stable: equal scores keep ascending DocId order.
    pub fn sort(&self) -> Vec<RankedEntry> {
        rank(self, RankOrder::Ascending)
    }

    /// Entries sorted in the requested order
    pub fn rank(&self, order: RankOrder) -> Vec<RankedEntry> {
        rank(self, order)
    }

    /// The `k` most relevant entries, highest first
    pub fn top(&self, k: usize) -> Vec<RankedEntry> {
        let mut ranked = rank(self, RankOrder::Descending);
        ranked.truncate(k);
        ranked
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Collect (doc, score) pairs; a repeated doc accumulates its scores
impl<K: Into<DocId>> FromIterator<(K, Score)> for ScoredResultSet {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        let mut scores: BTreeMap<DocId, Score> = BTreeMap::new();
        for (doc_id, score) in iter {
            scores
                .entry(doc_id.into())
                .and_modify(|existing| *existing = combine_relevance(*existing, score))
                .or_insert(score);
        }
        ScoredResultSet { scores }
    }
}

impl From<BTreeMap<DocId, Score>> for ScoredResultSet {
    fn from(scores: BTreeMap<DocId, Score>) -> Self {
        ScoredResultSet::new(scores)
    }
}

impl<K: Into<DocId>> From<HashMap<K, Score>> for ScoredResultSet {
    fn from(scores: HashMap<K, Score>) -> Self {
        scores.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ScoredResultSet {
    type Item = (&'a DocId, &'a Score);
    type IntoIter = std::collections::btree_map::Iter<'a, DocId, Score>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================

impl BitOr for &ScoredResultSet {
    type Output = ScoredResultSet;

    fn bitor(self, rhs: &ScoredResultSet) -> ScoredResultSet {
        self.or(rhs)
    }
}

impl BitAnd for &ScoredResultSet {
    type Output = ScoredResultSet;

    fn bitand(self, rhs: &ScoredResultSet) -> ScoredResultSet {
        self.and(rhs)
    }
}

impl Sub for &ScoredResultSet {
    type Output = ScoredResultSet;

    fn sub(self, rhs: &ScoredResultSet) -> ScoredResultSet {
        self.minus(rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
