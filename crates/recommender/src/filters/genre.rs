//! Filter to keep only movies of one genre.
//!
//! Used when a similarity query carries a genre constraint. Matching is
//! the same case-insensitive equality as [`MovieRecord::has_genre`].
//!
//! [`MovieRecord::has_genre`]: crate::catalog::MovieRecord::has_genre

use crate::catalog::{lookup_key, Catalog};
use crate::traits::{Candidate, Filter};

/// Keeps candidates whose movie lists the genre.
///
/// ## Algorithm
/// 1. Normalize the genre once at construction
/// 2. Look each candidate up in the catalog by row index
/// 3. Keep it if any of its genres matches; drop unknown rows
pub struct GenreFilter {
    genre_key: String,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            genre_key: lookup_key(genre),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, catalog: &Catalog) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                catalog
                    .get(candidate.index)
                    .is_some_and(|movie| movie.has_genre_key(&self.genre_key))
            })
            .collect()
    }
}
