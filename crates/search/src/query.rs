//! Boolean query plans
//!
//! A Query is an explicit left-to-right evaluation plan: a first term and
//! an ordered list of clauses. There is no operator precedence and no
//! query-string parsing; callers state the evaluation order directly.
//!
//! ```text
//! Query::term("java").and("programming").not("coffee")
//!
//!   ((java AND programming) NOT coffee)
//! ```

use std::fmt;
use wikisearch_core::ScoredResultSet;

// ============================================================================
// BoolOp
// ============================================================================

/// Boolean operator joining a clause to the accumulated result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    /// Union (`or`)
    Or,
    /// Intersection (`and`)
    And,
    /// Exclusion (`minus`)
    Not,
}

impl BoolOp {
    /// Combine the accumulator with the clause's result
    pub fn apply(&self, acc: &ScoredResultSet, rhs: &ScoredResultSet) -> ScoredResultSet {
        match self {
            BoolOp::Or => acc.or(rhs),
            BoolOp::And => acc.and(rhs),
            BoolOp::Not => acc.minus(rhs),
        }
    }

    /// Keyword used when displaying a query
    pub fn name(&self) -> &'static str {
        match self {
            BoolOp::Or => "OR",
            BoolOp::And => "AND",
            BoolOp::Not => "NOT",
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Clause
// ============================================================================

/// One step of a query plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Operator applied to the accumulator
    pub op: BoolOp,
    /// Term looked up for the right-hand side
    pub term: String,
}

impl Clause {
    /// Create a new clause
    pub fn new(op: BoolOp, term: impl Into<String>) -> Self {
        Clause {
            op,
            term: term.into(),
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// Multi-term boolean query, folded left to right
///
/// # Example
///
/// ```
/// use wikisearch_search::{BoolOp, Query};
///
/// let query = Query::term("java").and("programming").not("coffee");
/// assert_eq!(query.first_term(), "java");
/// assert_eq!(query.clauses()[1].op, BoolOp::Not);
/// assert_eq!(query.to_string(), "java AND programming NOT coffee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    first: String,
    clauses: Vec<Clause>,
}

impl Query {
    /// Single-term query
    pub fn term(term: impl Into<String>) -> Self {
        Query {
            first: term.into(),
            clauses: vec![],
        }
    }

    /// AND every term together; `None` if `terms` is empty
    pub fn all_of<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::fold(BoolOp::And, terms)
    }

    /// OR every term together; `None` if `terms` is empty
    pub fn any_of<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::fold(BoolOp::Or, terms)
    }

    fn fold<I, S>(op: BoolOp, terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms = terms.into_iter();
        let first = terms.next()?;
        Some(terms.fold(Query::term(first), |query, term| query.with_clause(op, term)))
    }

    /// Builder: append a clause with an explicit operator
    pub fn with_clause(mut self, op: BoolOp, term: impl Into<String>) -> Self {
        self.clauses.push(Clause::new(op, term));
        self
    }

    /// Builder: union with `term`
    pub fn or(self, term: impl Into<String>) -> Self {
        self.with_clause(BoolOp::Or, term)
    }

    /// Builder: intersect with `term`
    pub fn and(self, term: impl Into<String>) -> Self {
        self.with_clause(BoolOp::And, term)
    }

    /// Builder: exclude documents containing `term`
    pub fn not(self, term: impl Into<String>) -> Self {
        self.with_clause(BoolOp::Not, term)
    }

    /// The term whose lookup seeds the accumulator
    pub fn first_term(&self) -> &str {
        &self.first
    }

    /// Clauses in evaluation order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Every term in evaluation order, repeats included
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.first.as_str()).chain(self.clauses.iter().map(|c| c.term.as_str()))
    }

    /// Number of terms (first term plus clauses)
    pub fn len(&self) -> usize {
        1 + self.clauses.len()
    }

    /// Always false: a query has at least one term
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.first)?;
        for clause in &self.clauses {
            write!(f, " {} {}", clause.op, clause.term)?;
        }
        Ok(())
    }
}
