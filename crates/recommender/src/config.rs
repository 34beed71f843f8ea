//! Tunables for building a context and answering queries.

/// How the minimum-votes threshold `m` of the weighted rating is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoteThreshold {
    /// Quantile of vote counts across the whole catalog, in `[0, 1]`
    Percentile(f64),
    /// A fixed number of votes
    Fixed(f64),
}

impl Default for VoteThreshold {
    fn default() -> Self {
        VoteThreshold::Percentile(0.90)
    }
}

/// Recommender configuration.
///
/// ## Usage
/// ```ignore
/// let config = RecommenderConfig::default()
///     .with_vote_threshold(VoteThreshold::Fixed(250.0))
///     .with_top_n_range(1, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    pub vote_threshold: VoteThreshold,
    /// Use this as the global mean vote `C` instead of the catalog mean
    pub mean_vote_override: Option<f64>,
    /// Length of a genre ranking
    pub genre_limit: usize,
    /// Smallest accepted `top_n` for a similarity query
    pub min_top_n: usize,
    /// Largest accepted `top_n` for a similarity query
    pub max_top_n: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            vote_threshold: VoteThreshold::default(),
            mean_vote_override: None,
            genre_limit: 10,
            min_top_n: 5,
            max_top_n: 50,
        }
    }
}

impl RecommenderConfig {
    /// Configure how `m` is derived (default: 90th percentile)
    pub fn with_vote_threshold(mut self, threshold: VoteThreshold) -> Self {
        self.vote_threshold = threshold;
        self
    }

    /// Pin the global mean vote `C` (default: catalog mean)
    pub fn with_mean_vote(mut self, mean_vote: f64) -> Self {
        self.mean_vote_override = Some(mean_vote);
        self
    }

    /// Configure the genre ranking length (default: 10)
    pub fn with_genre_limit(mut self, limit: usize) -> Self {
        self.genre_limit = limit;
        self
    }

    /// Configure the accepted `top_n` range, inclusive (default: 5 to 50)
    pub fn with_top_n_range(mut self, min: usize, max: usize) -> Self {
        self.min_top_n = min;
        self.max_top_n = max;
        self
    }
}
