//! Search input state machine.
//!
//! Pure state transitions with no timers or I/O; the actor decides when each
//! transition happens and runs the fetches.

use std::sync::Arc;

use marquee_search::{MovieSearchError, Suggestion};
use tokio::sync::watch;

use super::state::{RequestState, SearchInputState};
use crate::config::SuggestConfig;
use crate::navigation::{Navigator, search_results_route};

/// A fetch the actor should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: String,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// Results stored and loading cleared.
    Applied,
    /// Failure recorded as a user-facing error.
    Failed,
    /// A newer generation exists; the completion was ignored.
    Stale,
}

/// Owns the component state and publishes every change.
#[derive(Debug)]
pub struct SearchInput {
    config: SuggestConfig,
    navigator: Arc<dyn Navigator>,
    state: SearchInputState,
    generation: u64,
    publisher: watch::Sender<SearchInputState>,
}

impl SearchInput {
    /// Creates the state machine and the channel its snapshots are published on.
    pub fn new(
        config: SuggestConfig,
        navigator: Arc<dyn Navigator>,
    ) -> (Self, watch::Receiver<SearchInputState>) {
        let (publisher, receiver) = watch::channel(SearchInputState::default());
        let input = Self {
            config,
            navigator,
            state: SearchInputState::default(),
            generation: 0,
            publisher,
        };
        (input, receiver)
    }

    pub fn state(&self) -> &SearchInputState {
        &self.state
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Records a keystroke. Returns false when the text did not change.
    pub fn set_query(&mut self, query: String) -> bool {
        if self.state.query == query {
            return false;
        }
        self.state.query = query;
        self.publish();
        true
    }

    /// Runs when the debounce timer fires.
    ///
    /// Every firing opens a new generation so that completions of earlier
    /// fetches are discarded. Short queries clear the list without a fetch.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        self.generation += 1;
        let query = self.state.query.clone();

        if query.chars().count() < self.config.min_query_chars {
            tracing::debug!(
                generation = self.generation,
                query = %query,
                "Query below threshold, clearing suggestions"
            );
            self.state.suggestions.clear();
            if self.state.is_loading() {
                self.state.request_state = RequestState::Idle;
            }
            self.publish();
            return None;
        }

        tracing::debug!(generation = self.generation, query = %query, "Starting suggestion fetch");
        self.state.request_state = RequestState::Loading;
        self.publish();

        Some(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Applies the outcome of a fetch started under `generation`.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        query: &str,
        result: Result<Vec<Suggestion>, MovieSearchError>,
    ) -> FetchDisposition {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current_generation = self.generation,
                query,
                "Discarding stale suggestion response"
            );
            return FetchDisposition::Stale;
        }

        let disposition = match result {
            Ok(mut suggestions) => {
                let received = suggestions.len();
                suggestions.truncate(self.config.max_suggestions);
                tracing::info!(
                    query,
                    received,
                    kept = suggestions.len(),
                    "Suggestions updated"
                );
                self.state.suggestions = suggestions;
                self.state.request_state = RequestState::Idle;
                FetchDisposition::Applied
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Error fetching search suggestions");
                self.state.request_state = RequestState::Error {
                    message: self.config.error_message.clone(),
                };
                FetchDisposition::Failed
            }
        };

        self.publish();
        disposition
    }

    /// Handles form submission.
    ///
    /// Navigates to the search results route when the trimmed query is not
    /// empty and returns that route.
    pub fn submit(&self) -> Option<String> {
        let route = search_results_route(&self.state.query)?;
        tracing::info!(route = %route, "Submitting search");
        self.navigator.navigate(&route);
        Some(route)
    }

    fn publish(&self) {
        // No receivers left is fine; the state is still kept locally
        self.publisher.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::navigation::RecordingNavigator;

    fn new_input() -> (SearchInput, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::new());
        let (input, _rx) = SearchInput::new(SuggestConfig::default(), navigator.clone());
        (input, navigator)
    }

    fn movies(count: u64) -> Vec<Suggestion> {
        (1..=count)
            .map(|i| Suggestion::new(i, format!("Movie {i}")))
            .collect()
    }

    #[test]
    fn test_fetch_sets_loading_and_returns_ticket() {
        let (mut input, _) = new_input();
        input.set_query("alien".to_string());

        let ticket = input.begin_fetch().unwrap();

        assert_eq!(ticket.query, "alien");
        assert_eq!(ticket.generation, 1);
        assert!(input.state().is_loading());
    }

    #[test]
    fn test_response_truncated_to_five_in_order() {
        let (mut input, _) = new_input();
        input.set_query("movie".to_string());
        let ticket = input.begin_fetch().unwrap();

        let disposition = input.complete_fetch(ticket.generation, &ticket.query, Ok(movies(8)));

        assert_eq!(disposition, FetchDisposition::Applied);
        let ids: Vec<u64> = input.state().suggestions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(input.state().request_state, RequestState::Idle);
    }

    #[test]
    fn test_failure_sets_error_and_keeps_suggestions() {
        let (mut input, _) = new_input();
        input.set_query("heat".to_string());
        let first = input.begin_fetch().unwrap();
        input.complete_fetch(first.generation, "heat", Ok(movies(2)));

        input.set_query("heath".to_string());
        let second = input.begin_fetch().unwrap();
        let disposition = input.complete_fetch(
            second.generation,
            "heath",
            Err(MovieSearchError::HttpStatus {
                status: 500,
                url: "mock://search/movie".to_string(),
            }),
        );

        assert_eq!(disposition, FetchDisposition::Failed);
        assert_eq!(
            input.state().error_message(),
            Some("Error al buscar sugerencias.")
        );
        assert!(!input.state().is_loading());
        assert_eq!(input.state().suggestions.len(), 2);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let (mut input, _) = new_input();
        input.set_query("heat".to_string());
        let ticket = input.begin_fetch().unwrap();
        input.complete_fetch(
            ticket.generation,
            "heat",
            Err(MovieSearchError::NetworkError {
                reason: "offline".to_string(),
            }),
        );

        let retry = input.begin_fetch().unwrap();
        input.complete_fetch(retry.generation, "heat", Ok(movies(1)));

        assert_eq!(input.state().request_state, RequestState::Idle);
        assert_eq!(input.state().error_message(), None);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let (mut input, _) = new_input();
        input.set_query("alien".to_string());
        let slow = input.begin_fetch().unwrap();
        input.set_query("aliens".to_string());
        let fast = input.begin_fetch().unwrap();

        input.complete_fetch(fast.generation, "aliens", Ok(vec![Suggestion::new(679, "Aliens")]));
        let disposition = input.complete_fetch(slow.generation, "alien", Ok(movies(5)));

        assert_eq!(disposition, FetchDisposition::Stale);
        assert_eq!(input.state().suggestions, vec![Suggestion::new(679, "Aliens")]);
    }

    #[test]
    fn test_short_query_clears_loading_and_outdates_inflight_fetch() {
        let (mut input, _) = new_input();
        input.set_query("alien".to_string());
        let ticket = input.begin_fetch().unwrap();

        input.set_query("al".to_string());
        assert_eq!(input.begin_fetch(), None);
        assert_eq!(input.state().request_state, RequestState::Idle);

        let disposition = input.complete_fetch(ticket.generation, "alien", Ok(movies(3)));
        assert_eq!(disposition, FetchDisposition::Stale);
        assert!(input.state().suggestions.is_empty());
    }

    #[test]
    fn test_short_query_keeps_error_message() {
        let (mut input, _) = new_input();
        input.set_query("alien".to_string());
        let ticket = input.begin_fetch().unwrap();
        input.complete_fetch(
            ticket.generation,
            "alien",
            Err(MovieSearchError::ParseError {
                reason: "bad json".to_string(),
            }),
        );

        input.set_query("a".to_string());
        input.begin_fetch();

        assert!(input.state().error_message().is_some());
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        let (mut input, _) = new_input();
        // Two characters, four bytes
        input.set_query("éé".to_string());
        assert_eq!(input.begin_fetch(), None);

        input.set_query("ééé".to_string());
        assert!(input.begin_fetch().is_some());
    }

    #[test]
    fn test_submit_navigates_trimmed_query() {
        let (mut input, navigator) = new_input();
        input.set_query(" inception ".to_string());

        assert_eq!(input.submit().as_deref(), Some("/?q=inception"));
        assert_eq!(navigator.targets(), vec!["/?q=inception"]);
    }

    #[test]
    fn test_submit_blank_query_does_nothing() {
        let (mut input, navigator) = new_input();
        input.set_query("   ".to_string());

        assert_eq!(input.submit(), None);
        assert!(navigator.targets().is_empty());
    }

    #[test]
    fn test_changes_are_published() {
        let navigator = Arc::new(RecordingNavigator::new());
        let (mut input, rx) = SearchInput::new(SuggestConfig::default(), navigator);

        input.set_query("dune".to_string());
        input.begin_fetch();

        let published = rx.borrow().clone();
        assert_eq!(published.query, "dune");
        assert!(published.is_loading());
    }

    proptest! {
        #[test]
        fn prop_short_queries_never_fetch(query in "\\PC{0,2}") {
            let (mut input, _) = new_input();
            input.set_query(query);
            prop_assert_eq!(input.begin_fetch(), None);
            prop_assert!(input.state().suggestions.is_empty());
        }

        #[test]
        fn prop_long_queries_fetch_exact_text(query in "\\PC{3,20}") {
            let (mut input, _) = new_input();
            input.set_query(query.clone());
            let ticket = input.begin_fetch();
            prop_assert_eq!(ticket.map(|t| t.query), Some(query));
        }
    }
}
