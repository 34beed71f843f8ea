//! # Data Loader Crate
//!
//! Loads the movie catalog, the precomputed similarity matrix and the genre
//! list from a dataset directory.
//!
//! ## Main Components
//!
//! - **types**: Raw rows (`RawMovie`), `SimilarityMatrix`, `Dataset`
//! - **parser**: Parse `movies.dat`, `similarity.dat` and `genres.json`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//! println!(
//!     "{} movies, similarity matrix is {}x{}",
//!     dataset.movies.len(),
//!     dataset.similarity.dim(),
//!     dataset.similarity.dim()
//! );
//! ```
//!
//! The loader does not check that the matrix matches the catalog; that is
//! done once when the recommender builds its context.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Dataset, RawMovie, RowIndex, SimilarityMatrix};
