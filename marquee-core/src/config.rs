//! Centralized configuration for Marquee.
//!
//! All tunable parameters are defined here and passed into components at
//! construction time; no component reads the environment by itself.

use std::time::Duration;

pub use marquee_search::TmdbConfig;

/// Central configuration for all Marquee components.
///
/// Built once at application startup. Supports environment variable
/// overrides for the API credential and the tunables below.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub tmdb: TmdbConfig,
    pub suggest: SuggestConfig,
}

/// Search input behavior.
///
/// Controls the debounce window, the minimum query length that triggers a
/// remote search, and how many suggestions are kept.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before fetching
    pub debounce: Duration,
    /// Queries shorter than this (in characters) never reach the provider
    pub min_query_chars: usize,
    /// Maximum number of suggestions kept from a response
    pub max_suggestions: usize,
    /// Message shown to the user when a fetch fails
    pub error_message: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            min_query_chars: 3,
            max_suggestions: 5,
            error_message: "Error al buscar sugerencias.".to_string(),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparsable numeric values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("TMDB_API_KEY") {
            config.tmdb.api_key = api_key;
        }

        if let Ok(base_url) = std::env::var("MARQUEE_TMDB_BASE_URL") {
            config.tmdb.api_base_url = base_url;
        }

        if let Ok(image_url) = std::env::var("MARQUEE_IMAGE_BASE_URL") {
            config.tmdb.image_base_url = image_url;
        }

        if let Ok(language) = std::env::var("MARQUEE_LANGUAGE") {
            config.tmdb.language = language;
        }

        if let Ok(timeout) = std::env::var("MARQUEE_REQUEST_TIMEOUT_SECS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.tmdb.request_timeout = Duration::from_secs(seconds);
            }
        }

        if let Ok(debounce) = std::env::var("MARQUEE_DEBOUNCE_MS") {
            if let Ok(millis) = debounce.parse::<u64>() {
                config.suggest.debounce = Duration::from_millis(millis);
            }
        }

        config
    }

    /// Creates a configuration for tests with a placeholder credential.
    pub fn for_testing() -> Self {
        Self {
            tmdb: TmdbConfig {
                api_key: "test-key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
