//! Marquee Search - Movie lookup for autocomplete suggestions

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides the suggestion data model and the provider seam used by the
//! search input component, with a TMDB-backed implementation for production
//! and a scriptable mock for tests.

pub mod config;
pub mod errors;
pub mod providers;
pub mod types;

// Re-export main types
pub use config::TmdbConfig;
pub use errors::MovieSearchError;
#[cfg(any(test, feature = "test-utils"))]
pub use providers::MockMovieProvider;
pub use providers::{MovieSearchProvider, TmdbProvider};
pub use types::{SearchResponse, Suggestion};

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
