//! Recommendation core for the movie lookup tool.
//!
//! This crate provides:
//! - `RecommenderContext`: validated catalog, similarity matrix and rating
//!   baseline, built once at startup
//! - Weighted rating (`scoring`) used to rank movies by quality
//! - `filter_by_genre`: top movies of a genre by weighted rating
//! - `RecommendationEngine`: movies similar to a seed, optionally within a
//!   genre, built on a composable candidate `FilterPipeline`
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Dataset;
//! use recommender::{filter_by_genre, RecommendationEngine, RecommenderConfig, RecommenderContext};
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//! let ctx = RecommenderContext::from_dataset(dataset, RecommenderConfig::default())?;
//!
//! let best_dramas = filter_by_genre(&ctx, "Drama");
//!
//! let engine = RecommendationEngine::new(&ctx);
//! match engine.recommend("Heat", Some("Crime"), 10)? {
//!     RecommendOutcome::Ranked(recs) => { /* render */ }
//!     RecommendOutcome::Empty => println!("No matches"),
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod genre_filter;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use catalog::{Catalog, GenreCatalog, MovieRecord};
pub use config::{RecommenderConfig, VoteThreshold};
pub use context::RecommenderContext;
pub use engine::{RecommendOutcome, Recommendation, RecommendationEngine};
pub use error::{LoadError, QueryError};
pub use filter_pipeline::FilterPipeline;
pub use genre_filter::filter_by_genre;
pub use scoring::{weighted_rating, RatingBaseline};
pub use traits::{Candidate, Filter};
