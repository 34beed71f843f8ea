//! # Recommendation Engine
//!
//! Title mode: movies most similar to a seed movie.
//!
//! ## Algorithm
//! 1. Reject `top_n` outside the configured range
//! 2. Resolve the seed title (exact, case-insensitive)
//! 3. Turn the seed's similarity row into candidates
//! 4. Filter: drop the seed, apply the optional genre constraint
//! 5. Rank by similarity, then weighted score, then row index
//! 6. Keep the first `top_n`

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::MovieRecord;
use crate::context::RecommenderContext;
use crate::error::QueryError;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExcludeSeedFilter, GenreFilter};
use crate::traits::Candidate;

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The recommended movie, weighted score included
    pub movie: MovieRecord,
    /// Similarity to the seed, unrounded
    pub similarity_score: f64,
}

/// Result of a similarity query that found its seed
///
/// Serializes as `{"outcome": "ranked", "recommendations": [...]}` or
/// `{"outcome": "empty"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "recommendations", rename_all = "snake_case")]
pub enum RecommendOutcome {
    /// At least one candidate survived filtering
    Ranked(Vec<Recommendation>),
    /// No candidate survived, typically because of the genre constraint
    Empty,
}

impl RecommendOutcome {
    /// The ranked list, empty for [`RecommendOutcome::Empty`]
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RecommendOutcome::Ranked(recs) => recs,
            RecommendOutcome::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecommendOutcome::Empty)
    }

    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            RecommendOutcome::Ranked(recs) => recs,
            RecommendOutcome::Empty => Vec::new(),
        }
    }
}

/// Answers similarity queries against a built context.
///
/// Holds no state besides the borrowed context: every call to
/// [`recommend`](Self::recommend) is independent.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    ctx: &'a RecommenderContext,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(ctx: &'a RecommenderContext) -> Self {
        Self { ctx }
    }

    /// Up to `top_n` movies similar to `seed_title`, optionally restricted
    /// to `genre`.
    ///
    /// # Returns
    /// * `Ok(Ranked(..))` - `min(top_n, candidates)` results, best first
    /// * `Ok(Empty)` - the seed exists but no other movie qualifies
    /// * `Err(InvalidTopN)` - checked before anything else
    /// * `Err(NotFound)` - no movie has this title
    #[instrument(skip(self))]
    pub fn recommend(
        &self,
        seed_title: &str,
        genre: Option<&str>,
        top_n: usize,
    ) -> Result<RecommendOutcome, QueryError> {
        let config = self.ctx.config();
        if top_n < config.min_top_n || top_n > config.max_top_n {
            return Err(QueryError::InvalidTopN {
                requested: top_n,
                min: config.min_top_n,
                max: config.max_top_n,
            });
        }

        let catalog = self.ctx.catalog();
        let seed = catalog
            .find_by_title(seed_title)
            .ok_or_else(|| QueryError::NotFound {
                title: seed_title.trim().to_string(),
            })?;
        debug!("Resolved seed '{}' to row {}", seed.title, seed.index);

        let candidates: Vec<Candidate> = self.ctx.similarity()[seed.index]
            .iter()
            .enumerate()
            .map(|(index, &similarity)| Candidate::new(index, similarity))
            .collect();

        let mut pipeline = FilterPipeline::new().add_filter(ExcludeSeedFilter::new(seed.index));
        if let Some(genre) = genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        let candidates = pipeline.apply(candidates, catalog);

        if candidates.is_empty() {
            debug!("No candidates left after filtering");
            return Ok(RecommendOutcome::Empty);
        }

        let mut ranked: Vec<(&MovieRecord, f64)> = candidates
            .iter()
            .filter_map(|c| catalog.get(c.index).map(|movie| (movie, c.similarity)))
            .collect();
        ranked.sort_by(|a, b| rank_order(a.0, a.1, b.0, b.1));
        ranked.truncate(top_n);

        debug!("Returning {} recommendations", ranked.len());
        Ok(RecommendOutcome::Ranked(
            ranked
                .into_iter()
                .map(|(movie, similarity_score)| Recommendation {
                    movie: movie.clone(),
                    similarity_score,
                })
                .collect(),
        ))
    }
}

/// Similarity descending, then weighted score descending, then row index
/// ascending. Total, so the ranking is fully deterministic.
fn rank_order(a: &MovieRecord, a_sim: f64, b: &MovieRecord, b_sim: f64) -> Ordering {
    b_sim
        .total_cmp(&a_sim)
        .then_with(|| b.weighted_score.total_cmp(&a.weighted_score))
        .then_with(|| a.index.cmp(&b.index))
}
