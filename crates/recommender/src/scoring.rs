//! Weighted rating and the catalog-wide baseline it depends on.
//!
//! ## Formula
//! ```text
//! WR = v / (v + m) * R + m / (v + m) * C
//! ```
//! `v` is the movie's vote count, `R` its vote average, `m` the minimum
//! votes threshold and `C` the mean vote across the catalog. A movie with
//! few votes is pulled toward `C`; one with many votes keeps close to `R`.

use crate::config::{RecommenderConfig, VoteThreshold};
use crate::error::LoadError;
use data_loader::RawMovie;
use serde::Serialize;

/// Catalog-wide constants of the weighted rating, fixed for the lifetime
/// of a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBaseline {
    /// `C`: mean vote average across the catalog
    pub mean_vote: f64,
    /// `m`: votes needed before a movie's own average dominates
    pub min_votes: f64,
}

impl RatingBaseline {
    pub fn new(mean_vote: f64, min_votes: f64) -> Self {
        Self {
            mean_vote,
            min_votes,
        }
    }

    /// Derive `C` and `m` from a full catalog snapshot.
    ///
    /// Configured overrides win over the derived values. An empty catalog
    /// yields a zero baseline.
    pub fn from_movies(movies: &[RawMovie], config: &RecommenderConfig) -> Result<Self, LoadError> {
        let mean_vote = match config.mean_vote_override {
            Some(c) if !(0.0..=10.0).contains(&c) => return Err(LoadError::InvalidMeanVote(c)),
            Some(c) => c,
            None if movies.is_empty() => 0.0,
            None => movies.iter().map(|m| m.vote_average).sum::<f64>() / movies.len() as f64,
        };

        let min_votes = match config.vote_threshold {
            VoteThreshold::Fixed(m) if !m.is_finite() || m < 0.0 => {
                return Err(LoadError::InvalidMinVotes(m));
            }
            VoteThreshold::Fixed(m) => m,
            VoteThreshold::Percentile(q) if !(0.0..=1.0).contains(&q) => {
                return Err(LoadError::InvalidPercentile(q));
            }
            VoteThreshold::Percentile(q) => {
                let mut counts: Vec<f64> = movies.iter().map(|m| m.vote_count as f64).collect();
                percentile(&mut counts, q).unwrap_or(0.0)
            }
        };

        Ok(Self::new(mean_vote, min_votes))
    }

    /// Weighted rating of a movie with `vote_count` votes averaging
    /// `vote_average`
    pub fn weighted_rating(&self, vote_count: u32, vote_average: f64) -> f64 {
        weighted_rating(vote_count, vote_average, self.min_votes, self.mean_vote)
    }
}

/// Bayesian-average weighted rating.
///
/// Falls back to `mean_vote` when `vote_count + min_votes` is zero.
pub fn weighted_rating(vote_count: u32, vote_average: f64, min_votes: f64, mean_vote: f64) -> f64 {
    let v = vote_count as f64;
    let total = v + min_votes;
    if total <= 0.0 {
        return mean_vote;
    }
    (v / total) * vote_average + (min_votes / total) * mean_vote
}

/// `q`-quantile of `values` with linear interpolation between the two
/// closest ranks. Sorts `values` in place. `None` when empty.
pub fn percentile(values: &mut [f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let position = q.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(values[lower] + (values[upper] - values[lower]) * fraction)
}
