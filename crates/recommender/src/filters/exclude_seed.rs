//! Filter to drop the seed movie from its own recommendations.
//!
//! The seed's similarity to itself is 1.0, so without this filter it would
//! always rank first.

use crate::catalog::Catalog;
use crate::traits::{Candidate, Filter};
use data_loader::RowIndex;

/// Removes the candidate at the seed's row index.
pub struct ExcludeSeedFilter {
    seed: RowIndex,
}

impl ExcludeSeedFilter {
    pub fn new(seed: RowIndex) -> Self {
        Self { seed }
    }
}

impl Filter for ExcludeSeedFilter {
    fn name(&self) -> &str {
        "ExcludeSeedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _catalog: &Catalog) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.index != self.seed)
            .collect()
    }
}
