//! TMDB movie search provider for production use.

use async_trait::async_trait;
use url::Url;

use super::MovieSearchProvider;
use crate::config::TmdbConfig;
use crate::errors::MovieSearchError;
use crate::types::{SearchResponse, Suggestion};

/// Search provider backed by the TMDB `search/movie` endpoint.
///
/// Issues exactly one request per call. Failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbProvider {
    /// Creates a provider from explicit settings.
    ///
    /// # Errors
    /// - `MovieSearchError::Configuration` - Base URL is invalid or the HTTP client could not be built
    pub fn new(config: TmdbConfig) -> Result<Self, MovieSearchError> {
        Url::parse(&config.search_endpoint()).map_err(|e| MovieSearchError::Configuration {
            reason: format!("invalid API base URL '{}': {e}", config.api_base_url),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| MovieSearchError::Configuration {
                reason: format!("HTTP client creation failed: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Builds the request URL with credential, language and query parameters.
    fn search_url(&self, query: &str) -> Result<Url, MovieSearchError> {
        let mut url = Url::parse(&self.config.search_endpoint()).map_err(|e| {
            MovieSearchError::Configuration {
                reason: format!("invalid search endpoint: {e}"),
            }
        })?;

        url.query_pairs_mut()
            .append_pair("api_key", &self.config.api_key)
            .append_pair("language", &self.config.language)
            .append_pair("query", query);

        Ok(url)
    }
}

#[async_trait]
impl MovieSearchProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<Suggestion>, MovieSearchError> {
        let url = self.search_url(query)?;
        // Never log the credential
        let endpoint = self.config.search_endpoint();

        tracing::debug!(endpoint = %endpoint, query, "Requesting movie search");

        let response = self.client.get(url).send().await.map_err(|e| {
            MovieSearchError::NetworkError {
                reason: format!("request to {endpoint} failed: {e}"),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovieSearchError::HttpStatus {
                status: status.as_u16(),
                url: endpoint,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MovieSearchError::NetworkError {
                reason: format!("reading response body failed: {e}"),
            })?;

        let search_response: SearchResponse =
            serde_json::from_str(&body).map_err(|e| MovieSearchError::ParseError {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        tracing::debug!(
            query,
            result_count = search_response.results.len(),
            "Movie search completed"
        );

        Ok(search_response.results)
    }
}
