//! Genre mode: the best-rated movies of one genre.

use crate::catalog::{lookup_key, MovieRecord};
use crate::context::RecommenderContext;
use tracing::instrument;

/// Top movies of `genre` by weighted score.
///
/// ## Algorithm
/// 1. Keep records listing `genre` (case-insensitive equality)
/// 2. Sort by weighted score descending, ties by row index ascending
/// 3. Truncate to `config.genre_limit` (10 by default)
///
/// The caller is expected to have resolved `genre` against
/// [`GenreCatalog`](crate::GenreCatalog). No match yields an empty vec.
#[instrument(skip(ctx))]
pub fn filter_by_genre(ctx: &RecommenderContext, genre: &str) -> Vec<MovieRecord> {
    let key = lookup_key(genre);
    let mut matches: Vec<&MovieRecord> = ctx
        .catalog()
        .records()
        .iter()
        .filter(|record| record.has_genre_key(&key))
        .collect();

    matches.sort_by(|a, b| {
        b.weighted_score
            .total_cmp(&a.weighted_score)
            .then_with(|| a.index.cmp(&b.index))
    });
    matches.truncate(ctx.config().genre_limit);

    tracing::debug!("{} movies in genre ranking", matches.len());
    matches.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RecommenderConfig, VoteThreshold};
    use data_loader::{RawMovie, SimilarityMatrix};

    fn build_context(movies: Vec<RawMovie>) -> RecommenderContext {
        let dim = movies.len();
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.0; dim]; dim]).unwrap();
        let config = RecommenderConfig::default()
            .with_vote_threshold(VoteThreshold::Fixed(100.0))
            .with_mean_vote(6.0);
        RecommenderContext::build(movies, matrix, None, config).unwrap()
    }

    fn movie(title: &str, genres: &[&str], vote_average: f64, vote_count: u32) -> RawMovie {
        RawMovie {
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            vote_average,
            vote_count,
        }
    }

    #[test]
    fn test_orders_by_weighted_score() {
        let ctx = build_context(vec![
            movie("Cult Hit", &["Horror"], 9.5, 3),
            movie("Classic", &["Horror", "Thriller"], 8.0, 4000),
            movie("Romcom", &["Comedy", "Romance"], 9.0, 5000),
            movie("Decent", &["horror"], 7.0, 800),
        ]);

        let titles: Vec<String> = filter_by_genre(&ctx, "Horror")
            .into_iter()
            .map(|m| m.title)
            .collect();

        assert_eq!(titles, vec!["Classic", "Decent", "Cult Hit"]);
    }

    #[test]
    fn test_ties_break_by_row_index() {
        let ctx = build_context(vec![
            movie("First", &["Drama"], 7.0, 200),
            movie("Second", &["Drama"], 7.0, 200),
            movie("Third", &["Drama"], 7.0, 200),
        ]);

        let indices: Vec<usize> = filter_by_genre(&ctx, "drama").iter().map(|m| m.index).collect();

        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_truncates_to_ten() {
        let movies = (0..25)
            .map(|i| movie(&format!("Film {i}"), &["Western"], 5.0 + i as f64 / 10.0, 300))
            .collect();
        let ctx = build_context(movies);

        let top = filter_by_genre(&ctx, "Western");

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].title, "Film 24");
        assert!(top.windows(2).all(|w| w[0].weighted_score >= w[1].weighted_score));
    }

    #[test]
    fn test_non_ascii_genre_matches_itself() {
        let ctx = build_context(vec![movie("Ηλέκτρα", &["ΔΡΑΜΑΣ"], 7.4, 900)]);

        let top = filter_by_genre(&ctx, "ΔΡΑΜΑΣ");

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title, "Ηλέκτρα");
    }

    #[test]
    fn test_no_match_is_empty() {
        let ctx = build_context(vec![movie("Heat", &["Crime"], 7.9, 5500)]);
        assert!(filter_by_genre(&ctx, "Musical").is_empty());
    }
}
