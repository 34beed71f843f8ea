//! Building the immutable query context.
//!
//! `RecommenderContext::build` is the single initialization step: it checks
//! that the catalog and the similarity matrix describe the same movies in
//! the same order, derives the rating baseline and attaches a weighted
//! score to every movie. Nothing is mutated afterwards, so the context can
//! be shared freely between queries.

use crate::catalog::{Catalog, GenreCatalog, MovieRecord};
use crate::config::RecommenderConfig;
use crate::error::LoadError;
use crate::scoring::RatingBaseline;
use data_loader::{Dataset, RawMovie, SimilarityMatrix};
use rayon::prelude::*;
use tracing::info;

/// Everything a query needs, validated once at startup
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    catalog: Catalog,
    similarity: SimilarityMatrix,
    genres: GenreCatalog,
    baseline: RatingBaseline,
    config: RecommenderConfig,
}

impl RecommenderContext {
    /// Validate and score a freshly loaded dataset.
    ///
    /// ## Steps
    /// 1. Matrix dimension must equal catalog size
    /// 2. Every movie needs at least one genre and a vote average in 0..=10
    /// 3. Derive `C` and `m` from the whole catalog
    /// 4. Compute weighted scores in parallel
    /// 5. Use `genres` as the genre list, or collect it from the movies
    pub fn build(
        movies: Vec<RawMovie>,
        similarity: SimilarityMatrix,
        genres: Option<Vec<String>>,
        config: RecommenderConfig,
    ) -> Result<Self, LoadError> {
        if similarity.dim() != movies.len() {
            return Err(LoadError::DimensionMismatch {
                catalog: movies.len(),
                matrix: similarity.dim(),
            });
        }
        validate_movies(&movies)?;

        let baseline = RatingBaseline::from_movies(&movies, &config)?;
        info!(
            "Rating baseline: mean vote C = {:.3}, minimum votes m = {:.1}",
            baseline.mean_vote, baseline.min_votes
        );

        let records: Vec<MovieRecord> = movies
            .into_par_iter()
            .enumerate()
            .map(|(index, movie)| MovieRecord {
                index,
                weighted_score: baseline.weighted_rating(movie.vote_count, movie.vote_average),
                title: movie.title,
                genres: movie.genres,
                vote_average: movie.vote_average,
                vote_count: movie.vote_count,
            })
            .collect();

        let genres = match genres {
            Some(labels) => GenreCatalog::from_labels(labels),
            None => GenreCatalog::from_records(&records),
        };
        let catalog = Catalog::new(records);

        info!(
            "Recommender ready: {} movies, {} genres",
            catalog.len(),
            genres.len()
        );

        Ok(Self {
            catalog,
            similarity,
            genres,
            baseline,
            config,
        })
    }

    /// Build straight from a loaded [`Dataset`]
    pub fn from_dataset(dataset: Dataset, config: RecommenderConfig) -> Result<Self, LoadError> {
        Self::build(dataset.movies, dataset.similarity, dataset.genres, config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn genres(&self) -> &GenreCatalog {
        &self.genres
    }

    pub fn baseline(&self) -> RatingBaseline {
        self.baseline
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }
}

fn validate_movies(movies: &[RawMovie]) -> Result<(), LoadError> {
    for (index, movie) in movies.iter().enumerate() {
        if movie.genres.is_empty() {
            return Err(LoadError::EmptyGenreSet {
                index,
                title: movie.title.clone(),
            });
        }
        if !(0.0..=10.0).contains(&movie.vote_average) {
            return Err(LoadError::InvalidVoteAverage {
                index,
                value: movie.vote_average,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VoteThreshold;

    fn movie(title: &str, genres: &[&str], vote_average: f64, vote_count: u32) -> RawMovie {
        RawMovie {
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            vote_average,
            vote_count,
        }
    }

    fn identity(dim: usize) -> SimilarityMatrix {
        let rows = (0..dim)
            .map(|i| (0..dim).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_build_scores_every_movie() {
        let movies = vec![
            movie("A", &["Drama"], 8.0, 1000),
            movie("B", &["Drama"], 9.0, 10),
            movie("C", &["Comedy"], 7.0, 500),
        ];
        let config = RecommenderConfig::default()
            .with_vote_threshold(VoteThreshold::Fixed(100.0))
            .with_mean_vote(8.0);

        let ctx = RecommenderContext::build(movies, identity(3), None, config).unwrap();

        assert_eq!(ctx.catalog().len(), 3);
        for (position, record) in ctx.catalog().records().iter().enumerate() {
            assert_eq!(record.index, position);
            let expected = ctx.baseline().weighted_rating(record.vote_count, record.vote_average);
            assert_eq!(record.weighted_score, expected);
        }
        assert_eq!(ctx.genres().labels(), &["Drama", "Comedy"]);
    }

    #[test]
    fn test_dimension_mismatch_is_fatal() {
        let movies = vec![movie("A", &["Drama"], 8.0, 10), movie("B", &["Drama"], 7.0, 10)];

        let err = RecommenderContext::build(movies, identity(3), None, RecommenderConfig::default())
            .unwrap_err();

        assert_eq!(err, LoadError::DimensionMismatch { catalog: 2, matrix: 3 });
    }

    #[test]
    fn test_rejects_movie_without_genres() {
        let movies = vec![movie("A", &["Drama"], 8.0, 10), movie("B", &[], 7.0, 10)];

        let err = RecommenderContext::build(movies, identity(2), None, RecommenderConfig::default())
            .unwrap_err();

        assert!(matches!(err, LoadError::EmptyGenreSet { index: 1, .. }));
    }

    #[test]
    fn test_rejects_out_of_range_vote_average() {
        let movies = vec![movie("A", &["Drama"], 10.5, 10)];

        let err = RecommenderContext::build(movies, identity(1), None, RecommenderConfig::default())
            .unwrap_err();

        assert!(matches!(err, LoadError::InvalidVoteAverage { index: 0, .. }));
    }

    #[test]
    fn test_explicit_genre_list_wins() {
        let movies = vec![movie("A", &["Drama"], 8.0, 10)];
        let genres = Some(vec!["Comedy".to_string(), "Drama".to_string()]);

        let ctx = RecommenderContext::build(movies, identity(1), genres, RecommenderConfig::default())
            .unwrap();

        assert_eq!(ctx.genres().labels(), &["Comedy", "Drama"]);
    }
}
