//! The validated, scored movie catalog and its genre list.

use data_loader::RowIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized form used for case-insensitive genre and title comparison
pub(crate) fn lookup_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A movie with its position and precomputed weighted score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Row in the catalog and in the similarity matrix
    pub index: RowIndex,
    /// Not guaranteed unique
    pub title: String,
    pub genres: Vec<String>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub weighted_score: f64,
}

impl MovieRecord {
    /// Whether any of this movie's genres equals `genre`, ignoring case
    pub fn has_genre(&self, genre: &str) -> bool {
        self.has_genre_key(&lookup_key(genre))
    }

    /// Same as [`has_genre`](Self::has_genre) with an already normalized key
    pub(crate) fn has_genre_key(&self, key: &str) -> bool {
        self.genres.iter().any(|g| lookup_key(g) == key)
    }
}

/// All movies in row order, with a title lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    /// Lowercased title -> first row with that title
    title_index: HashMap<String, RowIndex>,
}

impl Catalog {
    /// Build from records whose `index` equals their position
    pub(crate) fn new(records: Vec<MovieRecord>) -> Self {
        let mut title_index = HashMap::with_capacity(records.len());
        for record in &records {
            title_index
                .entry(lookup_key(&record.title))
                .or_insert(record.index);
        }
        Self {
            records,
            title_index,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: RowIndex) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Exact, case-insensitive title match.
    ///
    /// When several movies share the title, the one with the lowest row
    /// index wins.
    pub fn find_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.title_index
            .get(&lookup_key(title))
            .and_then(|&index| self.records.get(index))
    }
}

/// Distinct genre labels, case preserved, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCatalog {
    labels: Vec<String>,
}

impl GenreCatalog {
    /// Deduplicate labels case-insensitively, keeping the first spelling
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let labels = labels
            .into_iter()
            .map(Into::into)
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty() && seen.insert(lookup_key(label)))
            .collect();
        Self { labels }
    }

    /// Every genre appearing in the catalog
    pub fn from_records(records: &[MovieRecord]) -> Self {
        Self::from_labels(records.iter().flat_map(|r| r.genres.iter().cloned()))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display spelling of `label`, matched case-insensitively
    pub fn resolve(&self, label: &str) -> Option<&str> {
        let key = lookup_key(label);
        self.labels
            .iter()
            .find(|l| lookup_key(l) == key)
            .map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.resolve(label).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: RowIndex, title: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            index,
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            vote_average: 7.0,
            vote_count: 100,
            weighted_score: 7.0,
        }
    }

    #[test]
    fn test_has_genre_ignores_case() {
        let movie = record(0, "Alien", &["Horror", "Science Fiction"]);
        assert!(movie.has_genre("horror"));
        assert!(movie.has_genre("SCIENCE FICTION"));
        assert!(movie.has_genre("  Horror "));
        // equality, not substring
        assert!(!movie.has_genre("Science"));
        assert!(!movie.has_genre("Comedy"));
    }

    #[test]
    fn test_has_genre_non_ascii_label() {
        // word-final sigma lowercases differently per char and per string
        let movie = record(0, "Ηλέκτρα", &["ΔΡΑΜΑΣ"]);
        assert!(movie.has_genre("ΔΡΑΜΑΣ"));
        assert!(movie.has_genre("δραμας"));
        assert!(movie.has_genre("δραμας".to_uppercase().as_str()));
    }

    #[test]
    fn test_find_by_title() {
        let catalog = Catalog::new(vec![
            record(0, "The Thing", &["Horror"]),
            record(1, "Heat", &["Crime"]),
            record(2, "The Thing", &["Horror", "Mystery"]),
        ]);

        assert_eq!(catalog.find_by_title("heat").unwrap().index, 1);
        assert_eq!(catalog.find_by_title("  HEAT  ").unwrap().index, 1);
        // duplicate titles resolve to the first row
        assert_eq!(catalog.find_by_title("the thing").unwrap().index, 0);
        assert!(catalog.find_by_title("Hea").is_none());
        assert!(catalog.find_by_title("nonexistent movie").is_none());
    }

    #[test]
    fn test_genre_catalog_dedup_and_resolve() {
        let genres = GenreCatalog::from_labels(["Drama", "Comedy", "drama", " ", "Science Fiction"]);

        assert_eq!(genres.labels(), &["Drama", "Comedy", "Science Fiction"]);
        assert_eq!(genres.resolve("science fiction"), Some("Science Fiction"));
        assert_eq!(genres.resolve("DRAMA"), Some("Drama"));
        assert!(genres.resolve("Sci").is_none());
        assert!(!genres.contains("Western"));
    }

    #[test]
    fn test_genre_catalog_from_records() {
        let records = vec![
            record(0, "A", &["Action", "Thriller"]),
            record(1, "B", &["Drama", "action"]),
        ];
        let genres = GenreCatalog::from_records(&records);
        assert_eq!(genres.labels(), &["Action", "Thriller", "Drama"]);
    }
}
