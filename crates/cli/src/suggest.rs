//! "Did you mean" helpers for the shell.
//!
//! Plain case-insensitive substring containment; the recommender itself
//! only ever does exact matches.

use recommender::{Catalog, GenreCatalog, MovieRecord};

/// Genre labels containing `query`
pub fn genre_suggestions<'a>(genres: &'a GenreCatalog, query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    genres
        .labels()
        .iter()
        .filter(|label| label.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// First `limit` movies, in catalog order, whose title contains `query`
pub fn title_suggestions<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<&'a MovieRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .records()
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Title search: exact matches first, then substring matches, each group
/// by weighted score descending
pub fn search_titles<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a MovieRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // (relevance, movie): 0 = exact, 1 = substring
    let mut matches: Vec<(u8, &MovieRecord)> = catalog
        .records()
        .iter()
        .filter_map(|movie| {
            let title = movie.title.to_lowercase();
            if title == needle {
                Some((0, movie))
            } else if title.contains(&needle) {
                Some((1, movie))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.1.weighted_score.total_cmp(&a.1.weighted_score))
            .then_with(|| a.1.index.cmp(&b.1.index))
    });
    matches.into_iter().map(|(_, movie)| movie).collect()
}
