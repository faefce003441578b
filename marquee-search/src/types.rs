//! Data types for movie search suggestions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Response envelope from the movie search endpoint.
///
/// Only the `results` array matters for suggestions; paging fields and
/// anything else the API adds are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Movies in the order the API ranked them
    #[serde(default)]
    pub results: Vec<Suggestion>,
}

/// One candidate movie shown before the user commits to a full search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Remote movie identifier, used for the detail route
    pub id: u64,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Poster path relative to the image CDN base URL
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date as sent by the API, usually `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Suggestion {
    /// Creates a suggestion with only the required fields.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
        }
    }

    /// Sets the poster path.
    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Sets the release date string.
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    /// Release year parsed from the date string.
    ///
    /// Accepts full `YYYY-MM-DD` dates and falls back to a leading four digit
    /// year. Missing, empty or unparsable dates yield `None`.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?.trim();
        if date.is_empty() {
            return None;
        }

        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Some(parsed.year());
        }

        let prefix = date.get(..4)?;
        if prefix.bytes().all(|b| b.is_ascii_digit()) {
            prefix.parse().ok()
        } else {
            None
        }
    }

    /// Full poster URL on the image CDN, if the movie has a poster.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{image_base_url}{path}"))
    }

    /// Route of the per-movie detail page.
    pub fn detail_route(&self) -> String {
        format!("/movie/{}", self.id)
    }
}
