//src/types.rs

use thiserror::Error;

/// A directed overlap edge: a suffix of `source` matches a prefix of
/// `destination` over `length` bases. Edges are only ever created with
/// `length >= min_overlap` and never as self-loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub source: String,
    pub destination: String,
    pub length: usize,
}

/// A structured representation of one row in the graph report.
/// For example:
///  sequence  abundance  outDegree  bestOverlap  hasPredecessor
#[derive(Debug, Clone)]
pub struct GraphReportRow {
    pub sequence: String,
    pub abundance: u32,
    pub out_degree: usize,
    /// Longest overlap among this sequence's successor edges (0 if none).
    pub best_overlap: usize,
    pub has_predecessor: bool,
}

/// Errors surfaced by the overlap graph and its driver.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("minimum overlap must be at least 1, got {min_overlap}")]
    InvalidConfiguration { min_overlap: usize },

    #[error("sequence not present in the graph: {0}")]
    SequenceNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
