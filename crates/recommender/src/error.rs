//! Error types for the recommender crate.
//!
//! Load-time problems (`LoadError`) are fatal: no context exists, so no
//! query can run. Query-time problems (`QueryError`) are returned to the
//! caller, who decides whether to ask again. An empty result is neither;
//! see [`crate::RecommendOutcome::Empty`].

use data_loader::RowIndex;
use thiserror::Error;

/// The catalog, matrix or configuration can't form a valid context
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Similarity lookups would hit the wrong movies
    #[error("Similarity matrix is {matrix}x{matrix} but the catalog has {catalog} movies")]
    DimensionMismatch { catalog: usize, matrix: usize },

    #[error("Movie at row {index} ({title}) has no genres")]
    EmptyGenreSet { index: RowIndex, title: String },

    #[error("Movie at row {index} has vote_average {value}, expected 0 to 10")]
    InvalidVoteAverage { index: RowIndex, value: f64 },

    #[error("Vote count percentile must be between 0 and 1, got {0}")]
    InvalidPercentile(f64),

    #[error("Minimum vote threshold must be a non-negative number, got {0}")]
    InvalidMinVotes(f64),

    #[error("Mean vote override must be between 0 and 10, got {0}")]
    InvalidMeanVote(f64),
}

/// A single query was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No movie in the catalog has this title (case-insensitive)
    #[error("Movie not found: {title}")]
    NotFound { title: String },

    #[error("Requested {requested} recommendations, expected {min} to {max}")]
    InvalidTopN {
        requested: usize,
        min: usize,
        max: usize,
    },
}
