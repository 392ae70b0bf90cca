//! Error types for wikisearch
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The result-set operators and ranking functions are total and never
//! return an error. Failures originate only at the edges: the index lookup
//! collaborator and configuration loading.

use std::io;
use thiserror::Error;

/// Result type alias for wikisearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for wikisearch
#[derive(Debug, Error)]
pub enum Error {
    /// The index backing a lookup could not be reached or is corrupt
    ///
    /// Raised only by index lookup collaborators and propagated unchanged.
    /// A failed lookup is never the same thing as "term not found".
    #[error("Index unavailable for term '{term}': {reason}")]
    IndexUnavailable {
        /// Term whose lookup failed
        term: String,
        /// Collaborator-supplied description of the failure
        reason: String,
    },

    /// Malformed configuration file or value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (configuration file access)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Create an `IndexUnavailable` error
    pub fn index_unavailable(term: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::IndexUnavailable {
            term: term.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Check whether this error came from an unreachable index
    pub fn is_index_unavailable(&self) -> bool {
        matches!(self, Error::IndexUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_index_unavailable() {
        let err = Error::index_unavailable("java", "connection refused");
        let msg = err.to_string();
        assert!(msg.contains("Index unavailable"));
        assert!(msg.contains("java"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::invalid_config("unknown order 'sideways'");
        let msg = err.to_string();
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("sideways"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_is_index_unavailable() {
        assert!(Error::index_unavailable("t", "down").is_index_unavailable());
        assert!(!Error::invalid_config("bad").is_index_unavailable());
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::index_unavailable("rust", "corrupt posting list");

        match err {
            Error::IndexUnavailable { term, reason } => {
                assert_eq!(term, "rust");
                assert_eq!(reason, "corrupt posting list");
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
