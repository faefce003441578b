//! Remote movie API settings.

use std::time::Duration;

/// Settings for the TMDB search endpoint and image CDN.
///
/// Built once at startup and handed to the provider; nothing in this crate
/// reads the environment on its own.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API root, without trailing slash
    pub api_base_url: String,
    /// Image CDN prefix that poster paths are appended to
    pub image_base_url: String,
    /// API credential; not validated locally
    pub api_key: String,
    /// Result language sent with every search
    pub language: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w200".to_string(),
            api_key: String::new(),
            language: "es-ES".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: concat!("marquee/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TmdbConfig {
    /// Creates settings pointing at a custom API root, e.g. a local fixture server.
    pub fn with_base_url(api_base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// URL of the movie search endpoint.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search/movie", self.api_base_url.trim_end_matches('/'))
    }
}
