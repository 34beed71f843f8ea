//! Filter implementations for the candidate pipeline.

pub mod exclude_seed;
pub mod genre;

// Re-export for convenience
pub use exclude_seed::ExcludeSeedFilter;
pub use genre::GenreFilter;
