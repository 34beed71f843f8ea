//! Core trait for the candidate filtering pipeline.
//!
//! A similarity query starts from every row of the seed's similarity
//! vector; filters narrow that down before ranking.

use crate::catalog::Catalog;
use data_loader::RowIndex;

/// A movie under consideration for a similarity query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub index: RowIndex,
    /// Similarity to the seed, copied from the matrix as-is
    pub similarity: f64,
}

impl Candidate {
    pub fn new(index: RowIndex, similarity: f64) -> Self {
        Self { index, similarity }
    }
}

/// Core trait for filtering candidates.
///
/// Filters take ownership of the candidate list and return the survivors
/// in their original order. They never fail: an empty list is a valid
/// result.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    fn apply(&self, candidates: Vec<Candidate>, catalog: &Catalog) -> Vec<Candidate>;
}
