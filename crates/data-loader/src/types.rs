//! Core data types produced by the loader.
//!
//! The loader only knows about raw rows: it has no notion of weighted
//! scores or genre validation. Those are attached once by the recommender
//! when it builds its context.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a movie in the catalog, which is also its row and column
/// in the similarity matrix.
pub type RowIndex = usize;

// =============================================================================
// Movie rows
// =============================================================================

/// A movie as read from `movies.dat`, before any derived values exist.
///
/// The row index is implicit: it is the position of the row in the
/// `Vec<RawMovie>` returned by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    pub title: String,
    /// Genre labels, case preserved (e.g. "Science Fiction")
    pub genres: Vec<String>,
    /// Mean user vote, 0.0 to 10.0
    pub vote_average: f64,
    pub vote_count: u32,
}

// =============================================================================
// Similarity matrix
// =============================================================================

/// Dense, square matrix of precomputed content similarities.
///
/// Stored row-major in a single allocation; `get(i, j)` is the similarity
/// between catalog rows `i` and `j`. Values are kept exactly as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build a matrix from individual rows.
    ///
    /// Fails if the rows don't all have `rows.len()` columns or if any value
    /// is NaN or infinite. `line` in the error is the 1-based row number.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        let mut values = Vec::with_capacity(dim * dim);

        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(DataLoadError::FieldCountMismatch {
                    expected: dim,
                    found: row.len(),
                    line: idx + 1,
                });
            }
            if let Some(bad) = row.iter().find(|v| !v.is_finite()) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("similarity row {}", idx + 1),
                    value: bad.to_string(),
                });
            }
            values.extend(row);
        }

        Ok(Self { dim, values })
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Similarities from movie `index` to every movie, itself included
    pub fn row(&self, index: RowIndex) -> Option<&[f64]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.values[start..start + self.dim])
    }

    /// Similarity between two movies
    pub fn get(&self, i: RowIndex, j: RowIndex) -> Option<f64> {
        self.row(i).and_then(|row| row.get(j).copied())
    }
}

/// Row access that panics when `index >= dim()`, like slice indexing
impl std::ops::Index<RowIndex> for SimilarityMatrix {
    type Output = [f64];

    fn index(&self, index: RowIndex) -> &[f64] {
        let start = index * self.dim;
        &self.values[start..start + self.dim]
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Everything read from a dataset directory, still unvalidated against
/// each other.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub movies: Vec<RawMovie>,
    pub similarity: SimilarityMatrix,
    /// Contents of `genres.json`, if the file exists
    pub genres: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_row_access() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.2],
            vec![0.9, 1.0, 0.4],
            vec![0.2, 0.4, 1.0],
        ])
        .unwrap();

        assert_eq!(matrix.dim(), 3);
        assert_eq!(matrix.row(1).unwrap(), &[0.9, 1.0, 0.4]);
        assert_eq!(matrix.get(2, 0), Some(0.2));
        assert_eq!(&matrix[2], &[0.2, 0.4, 1.0]);
        assert!(matrix.row(3).is_none());
        assert!(matrix.get(0, 3).is_none());
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let result = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]);
        assert!(matches!(
            result,
            Err(DataLoadError::FieldCountMismatch {
                expected: 2,
                found: 1,
                line: 2
            })
        ));
    }

    #[test]
    fn test_matrix_rejects_non_finite() {
        let result = SimilarityMatrix::from_rows(vec![vec![1.0, f64::NAN], vec![0.5, 1.0]]);
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::from_rows(Vec::new()).unwrap();
        assert_eq!(matrix.dim(), 0);
        assert!(matrix.row(0).is_none());
    }
}
