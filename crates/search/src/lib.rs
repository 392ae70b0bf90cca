//! Query evaluation for wikisearch
//!
//! This crate provides:
//! - IndexLookup trait for the external index collaborator
//! - MemoryIndex in-memory implementation
//! - Query / BoolOp explicit evaluation plans
//! - QueryEvaluator folding lookups with the result-set algebra
//! - SearchConfig loaded from `wikisearch.toml`
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use wikisearch_search::{MemoryIndex, Query, QueryEvaluator};
//!
//! let index = MemoryIndex::new();
//! index.set_counts("java", [("wiki/Java", 3), ("wiki/C", 1)]);
//! index.set_counts("programming", [("wiki/Java", 2), ("wiki/Python", 5)]);
//!
//! let evaluator = QueryEvaluator::new(Arc::new(index));
//! let result = evaluator.evaluate(&Query::term("java").and("programming"))?;
//! assert_eq!(result.relevance("wiki/Java"), 5);
//! # Ok::<(), wikisearch_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod evaluator;
pub mod lookup;
pub mod memory;
pub mod query;

// Re-export commonly used types
pub use config::{SearchConfig, CONFIG_FILE_NAME};
pub use evaluator::QueryEvaluator;
pub use lookup::IndexLookup;
pub use memory::MemoryIndex;
pub use query::{BoolOp, Clause, Query};
