//! Core types for wikisearch
//!
//! This crate defines the result algebra used throughout the system:
//! - DocId / Score: document identifiers and relevance weights
//! - ScoredResultSet: immutable scored result of a query
//! - Set operators: `or` (union), `and` (intersection), `minus` (difference)
//! - Ranking: RankedEntry, RankOrder, stable sort by relevance
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ranking;
pub mod result_set;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ranking::{rank, RankOrder, RankedEntry};
pub use result_set::ScoredResultSet;
pub use types::{combine_relevance, DocId, Score};
