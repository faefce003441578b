//! Error types for movie search functionality.

use thiserror::Error;

/// Errors that can occur while querying a movie search provider.
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// Remote API answered with a non-success status code.
    #[error("HTTP error {status} from {url}")]
    HttpStatus {
        /// Status code returned by the remote API
        status: u16,
        /// Request URL with the credential redacted
        url: String,
    },

    /// Network communication failed before a response was received.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Response body could not be decoded.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Provider configuration is unusable (bad base URL, client build failure).
    #[error("Configuration error: {reason}")]
    Configuration {
        /// The reason for the configuration error
        reason: String,
    },
}

impl MovieSearchError {
    /// Whether a later identical request could plausibly succeed.
    ///
    /// Purely informational: the search input never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            MovieSearchError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            MovieSearchError::NetworkError { .. } => true,
            MovieSearchError::ParseError { .. } | MovieSearchError::Configuration { .. } => false,
        }
    }
}
