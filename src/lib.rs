//! wikisearch - scored result-set algebra for boolean full-text queries
//!
//! A term lookup against an inverted index yields a [`ScoredResultSet`]:
//! documents mapped to term-frequency relevance. Sets combine with
//! `or` (union), `and` (intersection) and `minus` (difference), summing
//! relevance where documents overlap, and rank deterministically.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use wikisearch::{MemoryIndex, Query, QueryEvaluator};
//!
//! let index = MemoryIndex::new();
//! index.set_counts("java", [("wiki/Java", 3), ("wiki/C", 1)]);
//! index.set_counts("programming", [("wiki/Java", 2), ("wiki/Python", 5)]);
//!
//! let evaluator = QueryEvaluator::new(Arc::new(index));
//! let ranked = evaluator.search(&Query::term("java").or("programming"))?;
//! assert_eq!(ranked[0].doc_id.as_str(), "wiki/C");
//! # Ok::<(), wikisearch::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `wikisearch-core`: identifiers, result sets, operators, ranking, errors
//! - `wikisearch-search`: index collaborator trait, query plans, evaluator, config

pub use wikisearch_core::*;
pub use wikisearch_search::*;
