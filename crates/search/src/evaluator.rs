//! Boolean query evaluator
//!
//! This module provides:
//! - QueryEvaluator: folds per-term lookups into one ScoredResultSet
//! - Single-term lookup
//! - Ranked search honoring SearchConfig
//!
//! # Flow
//!
//! ```text
//! Query ──► lookup(first) ──► acc
//!              │
//!              ▼
//!   for each clause: acc = op(acc, lookup(term))
//!              │
//!              ▼
//!   rank(acc, config.order) ──► truncate(config.limit)
//! ```
//!
//! The evaluator is STATELESS between calls. It holds only the injected
//! index and its config; per-query lookup caching is scoped to one call.

use crate::config::SearchConfig;
use crate::lookup::IndexLookup;
use crate::query::Query;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use wikisearch_core::{RankedEntry, Result, ScoredResultSet};

// ============================================================================
// QueryEvaluator
// ============================================================================

/// Evaluates boolean queries against an injected index
///
/// # Errors
///
/// A lookup failure aborts evaluation and is returned unchanged. There is
/// no retry and no partial result.
#[derive(Clone)]
pub struct QueryEvaluator {
    /// Index lookup collaborator
    index: Arc<dyn IndexLookup>,
    /// Presentation settings for `search`
    config: SearchConfig,
}

impl QueryEvaluator {
    /// Create a new evaluator over `index` with default config
    pub fn new(index: Arc<dyn IndexLookup>) -> Self {
        QueryEvaluator {
            index,
            config: SearchConfig::default(),
        }
    }

    /// Builder: set config
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Current config
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Name of the underlying index
    pub fn index_name(&self) -> &str {
        self.index.name()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Look up a single term
    pub fn lookup(&self, term: &str) -> Result<ScoredResultSet> {
        match self.index.lookup(term) {
            Ok(set) => {
                debug!(
                    target: "wikisearch::query",
                    index = self.index.name(),
                    term,
                    hits = set.len(),
                    "Term looked up"
                );
                Ok(set)
            }
            Err(e) => {
                warn!(
                    target: "wikisearch::query",
                    index = self.index.name(),
                    term,
                    error = %e,
                    "Index lookup failed"
                );
                Err(e)
            }
        }
    }

    /// Evaluate a query into one combined result set
    ///
    /// Looks up each distinct term once, seeds the accumulator with the
    /// first term and folds clauses left to right.
    pub fn evaluate(&self, query: &Query) -> Result<ScoredResultSet> {
        let mut fetched: HashMap<&str, ScoredResultSet> = HashMap::new();

        let mut acc = self.fetch(query.first_term(), &mut fetched)?.clone();
        for clause in query.clauses() {
            let rhs = self.fetch(&clause.term, &mut fetched)?;
            acc = clause.op.apply(&acc, rhs);
            debug!(
                target: "wikisearch::query",
                op = clause.op.name(),
                term = %clause.term,
                size = acc.len(),
                "Clause applied"
            );
        }
        Ok(acc)
    }

    /// Evaluate a query and rank it per config
    pub fn search(&self, query: &Query) -> Result<Vec<RankedEntry>> {
        let order = self.config.rank_order()?;
        let result = self.evaluate(query)?;

        let mut ranked = result.rank(order);
        if let Some(limit) = self.config.limit {
            ranked.truncate(limit);
        }

        debug!(
            target: "wikisearch::query",
            query = %query,
            matched = result.len(),
            returned = ranked.len(),
            "Search complete"
        );
        Ok(ranked)
    }

    fn fetch<'q, 'c>(
        &self,
        term: &'q str,
        fetched: &'c mut HashMap<&'q str, ScoredResultSet>,
    ) -> Result<&'c ScoredResultSet> {
        match fetched.entry(term) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let set = self.lookup(term)?;
                Ok(entry.insert(set))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryIndex;
    use wikisearch_core::RankOrder;

    fn wiki_index() -> Arc<MemoryIndex> {
        let index = MemoryIndex::new();
        index.set_counts("java", [("wiki/Java", 3), ("wiki/C", 1)]);
        index.set_counts("programming", [("wiki/Java", 2), ("wiki/Python", 5)]);
        index.set_counts("coffee", [("wiki/Java", 1), ("wiki/Espresso", 9)]);
        Arc::new(index)
    }

    fn pairs(entries: &[RankedEntry]) -> Vec<(&str, i64)> {
        entries.iter().map(|e| (e.doc_id.as_str(), e.score)).collect()
    }

    #[test]
    fn test_evaluator_new() {
        let evaluator = QueryEvaluator::new(wiki_index());
        assert_eq!(evaluator.index_name(), "memory");
        assert_eq!(evaluator.config(), &SearchConfig::default());
    }

    #[test]
    fn test_single_term() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator.evaluate(&Query::term("java")).unwrap();
        assert_eq!(result, evaluator.lookup("java").unwrap());
    }

    #[test]
    fn test_or_query() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator
            .evaluate(&Query::term("java").or("programming"))
            .unwrap();
        assert_eq!(result.relevance("wiki/Java"), 5);
        assert_eq!(result.relevance("wiki/C"), 1);
        assert_eq!(result.relevance("wiki/Python"), 5);
    }

    #[test]
    fn test_and_query() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator
            .evaluate(&Query::term("java").and("programming"))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.relevance("wiki/Java"), 5);
    }

    #[test]
    fn test_not_query() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator
            .evaluate(&Query::term("java").not("programming"))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.relevance("wiki/C"), 1);
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        let evaluator = QueryEvaluator::new(wiki_index());
        // (java OR programming) NOT coffee
        let result = evaluator
            .evaluate(&Query::term("java").or("programming").not("coffee"))
            .unwrap();
        assert!(!result.contains("wiki/Java"));
        assert!(result.contains("wiki/C"));
        assert!(result.contains("wiki/Python"));
    }

    #[test]
    fn test_unknown_term_yields_empty_and() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator
            .evaluate(&Query::term("java").and("cobol"))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_repeated_term_doubles_under_and() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let result = evaluator.evaluate(&Query::term("java").and("java")).unwrap();
        assert_eq!(result.relevance("wiki/Java"), 6);
    }

    #[test]
    fn test_unavailable_index_propagates() {
        let index = wiki_index();
        index.set_available(false);
        let evaluator = QueryEvaluator::new(index);

        let err = evaluator
            .evaluate(&Query::term("java").or("programming"))
            .unwrap_err();
        assert!(err.is_index_unavailable());
    }

    #[test]
    fn test_search_default_ascending() {
        let evaluator = QueryEvaluator::new(wiki_index());
        let ranked = evaluator
            .search(&Query::term("java").or("programming"))
            .unwrap();
        assert_eq!(
            pairs(&ranked),
            vec![("wiki/C", 1), ("wiki/Java", 5), ("wiki/Python", 5)]
        );
    }

    #[test]
    fn test_search_descending_with_limit() {
        let config = SearchConfig::default()
            .with_order(RankOrder::Descending)
            .with_limit(2);
        let evaluator = QueryEvaluator::new(wiki_index()).with_config(config);

        let ranked = evaluator
            .search(&Query::term("java").or("programming"))
            .unwrap();
        assert_eq!(pairs(&ranked), vec![("wiki/Java", 5), ("wiki/Python", 5)]);
    }

    #[test]
    fn test_search_rejects_invalid_order() {
        let config = SearchConfig {
            order: "random".to_string(),
            limit: None,
        };
        let evaluator = QueryEvaluator::new(wiki_index()).with_config(config);
        assert!(evaluator.search(&Query::term("java")).is_err());
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryEvaluator>();
    }
}
