//! Marquee Core - Debounced movie suggestions
//!
//! This crate provides the search input component: it tracks the user's
//! query, waits for a quiet period before asking a movie search provider for
//! suggestions, exposes the resulting state for rendering, and hands full
//! searches off to an injected navigator.

pub mod config;
pub mod navigation;
pub mod search_input;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{MarqueeConfig, SuggestConfig};
pub use navigation::{Navigator, RecordingNavigator, TracingNavigator};
pub use search_input::{
    RequestState, SearchInputError, SearchInputHandle, SearchInputState, spawn_search_input,
};

/// Errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Search input error: {0}")]
    SearchInput(#[from] SearchInputError),

    #[error("Search error: {0}")]
    Search(#[from] marquee_search::MovieSearchError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::SearchInput(_) => "Search input stopped unexpectedly".to_string(),
            MarqueeError::Search(e) => match e {
                marquee_search::MovieSearchError::HttpStatus { status: 401, .. } => {
                    "The movie API rejected the credential".to_string()
                }
                marquee_search::MovieSearchError::NetworkError { .. } => {
                    "Could not reach the movie API".to_string()
                }
                _ => "Movie search failed".to_string(),
            },
            MarqueeError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
