//! Provider implementations for movie search functionality.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::Suggestion;

pub mod mock;
pub mod tmdb;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockMovieProvider;
pub use tmdb::TmdbProvider;

/// Trait for movie search providers.
///
/// Implementations return every match in the order the backend ranked them.
/// Truncation to a display limit is the caller's concern.
#[async_trait]
pub trait MovieSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search movies matching free text.
    ///
    /// # Errors
    /// - `MovieSearchError::HttpStatus` - Backend answered with a non-success status
    /// - `MovieSearchError::NetworkError` - Network connectivity issues
    /// - `MovieSearchError::ParseError` - Response body was not the expected shape
    async fn search_movies(&self, query: &str) -> Result<Vec<Suggestion>, MovieSearchError>;
}
