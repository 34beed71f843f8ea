//! Parsers for the dataset files.
//!
//! - movies.dat: title::genres::vote_average::vote_count
//! - similarity.dat: one whitespace-separated matrix row per line
//! - genres.json: JSON array of genre labels

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::io::ErrorKind;
use std::path::Path;

const MOVIES_FILE: &str = "movies.dat";
const SIMILARITY_FILE: &str = "similarity.dat";
const GENRES_FILE: &str = "genres.json";

/// Read a whole UTF-8 file, reporting a missing file by path
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Non-empty lines with their 1-based line numbers
fn content_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse the movies.dat file
///
/// Format: title::Genre1|Genre2::vote_average::vote_count
///
/// The three trailing fields are split off from the right, so a title may
/// itself contain "::". Row indices follow the order of non-empty lines.
pub fn parse_movies(path: &Path) -> Result<Vec<RawMovie>> {
    let content = read_file(path)?;
    content_lines(&content)
        .map(|(line_no, line)| parse_movie_line(line, line_no))
        .collect()
}

fn parse_movie_line(line: &str, line_no: usize) -> Result<RawMovie> {
    let parse_error = |reason: String| DataLoadError::ParseError {
        file: MOVIES_FILE.to_string(),
        line: line_no,
        reason,
    };

    // rsplitn yields fields right to left
    let mut parts = line.rsplitn(4, "::");
    let vote_count = parts
        .next()
        .ok_or_else(|| parse_error("Missing vote_count".to_string()))?;
    let vote_average = parts
        .next()
        .ok_or_else(|| parse_error("Missing vote_average".to_string()))?;
    let genres = parts
        .next()
        .ok_or_else(|| parse_error("Missing genres".to_string()))?;
    let title = parts
        .next()
        .ok_or_else(|| parse_error("Missing title".to_string()))?;

    let title = title.trim();
    if title.is_empty() {
        return Err(parse_error("Empty title".to_string()));
    }

    Ok(RawMovie {
        title: title.to_string(),
        genres: parse_genre_labels(genres),
        vote_average: vote_average
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid vote_average: {}", e)))?,
        vote_count: vote_count
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid vote_count: {}", e)))?,
    })
}

/// Split pipe-separated genre labels, dropping blanks
///
/// Example: "Action|Science Fiction" -> ["Action", "Science Fiction"]
fn parse_genre_labels(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the similarity.dat file into a square matrix
pub fn parse_similarity(path: &Path) -> Result<SimilarityMatrix> {
    let content = read_file(path)?;
    let mut rows = Vec::new();

    for (line_no, line) in content_lines(&content) {
        let row = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|e| DataLoadError::ParseError {
                    file: SIMILARITY_FILE.to_string(),
                    line: line_no,
                    reason: format!("Invalid similarity '{}': {}", field, e),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    SimilarityMatrix::from_rows(rows)
}

/// Parse genres.json, a plain JSON array of labels
pub fn parse_genre_list(path: &Path) -> Result<Vec<String>> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| DataLoadError::Json {
        file: GENRES_FILE.to_string(),
        source,
    })
}

impl Dataset {
    /// Load a dataset directory
    ///
    /// Reads movies.dat and similarity.dat in parallel; genres.json is
    /// optional and skipped when missing.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading dataset from {}", data_dir.display());

        let movies_path = data_dir.join(MOVIES_FILE);
        let similarity_path = data_dir.join(SIMILARITY_FILE);
        let genres_path = data_dir.join(GENRES_FILE);

        let (movies, similarity) = rayon::join(
            || parse_movies(&movies_path),
            || parse_similarity(&similarity_path),
        );
        let movies = movies?;
        let similarity = similarity?;

        let genres = if genres_path.exists() {
            Some(parse_genre_list(&genres_path)?)
        } else {
            tracing::debug!("{} not found, genres will be derived from movies", GENRES_FILE);
            None
        };

        tracing::info!(
            "Loaded {} movies and a {}x{} similarity matrix",
            movies.len(),
            similarity.dim(),
            similarity.dim()
        );

        Ok(Self {
            movies,
            similarity,
            genres,
        })
    }
}
