//! Deterministic ranking of result sets
//!
//! The natural order is ascending relevance. Presenting "most relevant
//! first" is an explicit choice of `RankOrder::Descending`.
//!
//! Sorting is stable and the input always iterates in ascending `DocId`
//! order, so equal scores are tie-broken by `DocId` in both directions.

use crate::result_set::ScoredResultSet;
use crate::types::{DocId, Score};
use serde::{Deserialize, Serialize};

// ============================================================================
// RankedEntry
// ============================================================================

/// One row of a ranked result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Document identifier
    pub doc_id: DocId,
    /// Accumulated relevance
    pub score: Score,
}

impl RankedEntry {
    /// Create a new RankedEntry
    pub fn new(doc_id: impl Into<DocId>, score: Score) -> Self {
        RankedEntry {
            doc_id: doc_id.into(),
            score,
        }
    }
}

// ============================================================================
// RankOrder
// ============================================================================

/// Direction of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Lowest relevance first (default)
    #[default]
    Ascending,
    /// Highest relevance first
    Descending,
}

impl RankOrder {
    /// Parse a lowercase order name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ascending" => Some(RankOrder::Ascending),
            "descending" => Some(RankOrder::Descending),
            _ => None,
        }
    }

    /// Lowercase name, inverse of `from_name`
    pub fn name(&self) -> &'static str {
        match self {
            RankOrder::Ascending => "ascending",
            RankOrder::Descending => "descending",
        }
    }
}

// ============================================================================
// rank
// ============================================================================

/// Rank every entry of a set by score
///
/// Never fails; an empty set yields an empty list.
pub fn rank(set: &ScoredResultSet, order: RankOrder) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = set
        .iter()
        .map(|(doc_id, score)| RankedEntry::new(doc_id.clone(), score))
        .collect();

    // slice::sort_by is stable
    match order {
        RankOrder::Ascending => entries.sort_by(|a, b| a.score.cmp(&b.score)),
        RankOrder::Descending => entries.sort_by(|a, b| b.score.cmp(&a.score)),
    }
    entries
}
