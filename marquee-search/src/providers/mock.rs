//! Mock provider implementation for testing.

#[cfg(any(test, feature = "test-utils"))]
pub use self::inner::MockMovieProvider;

#[cfg(any(test, feature = "test-utils"))]
mod inner {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::errors::MovieSearchError;
    use crate::providers::MovieSearchProvider;
    use crate::types::Suggestion;

    /// Scripted outcome for a single query.
    #[derive(Debug, Clone)]
    enum MockOutcome {
        Results(Vec<Suggestion>),
        Status(u16),
        Network(String),
    }

    #[derive(Debug, Default)]
    struct MockState {
        calls: Vec<String>,
        outcomes: HashMap<String, MockOutcome>,
        delays: HashMap<String, Duration>,
    }

    /// Scriptable in-memory provider that records every query it receives.
    ///
    /// Unscripted queries return three generated movies titled after the query.
    /// Delays use `tokio::time::sleep`, so paused-clock tests stay deterministic.
    #[derive(Debug, Default)]
    pub struct MockMovieProvider {
        state: Mutex<MockState>,
    }

    impl MockMovieProvider {
        /// Creates a mock provider with no scripted outcomes.
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes `query` return exactly `results`.
        pub fn respond_with(&self, query: &str, results: Vec<Suggestion>) {
            self.state
                .lock()
                .outcomes
                .insert(query.to_string(), MockOutcome::Results(results));
        }

        /// Makes `query` fail with the given HTTP status.
        pub fn fail_with_status(&self, query: &str, status: u16) {
            self.state
                .lock()
                .outcomes
                .insert(query.to_string(), MockOutcome::Status(status));
        }

        /// Makes `query` fail as if the network were unreachable.
        pub fn fail_with_network_error(&self, query: &str, reason: &str) {
            self.state
                .lock()
                .outcomes
                .insert(query.to_string(), MockOutcome::Network(reason.to_string()));
        }

        /// Delays the answer for `query`.
        pub fn delay(&self, query: &str, delay: Duration) {
            self.state.lock().delays.insert(query.to_string(), delay);
        }

        /// Queries received so far, in call order.
        pub fn calls(&self) -> Vec<String> {
            self.state.lock().calls.clone()
        }

        /// Number of queries received so far.
        pub fn call_count(&self) -> usize {
            self.state.lock().calls.len()
        }

        /// Generated results for unscripted queries.
        pub fn generated_results(query: &str) -> Vec<Suggestion> {
            (1..=3)
                .map(|i| {
                    Suggestion::new(i, format!("{query} {i}"))
                        .with_release_date(format!("20{:02}-01-01", i))
                })
                .collect()
        }
    }

    #[async_trait]
    impl MovieSearchProvider for MockMovieProvider {
        async fn search_movies(&self, query: &str) -> Result<Vec<Suggestion>, MovieSearchError> {
            let (outcome, delay) = {
                let mut state = self.state.lock();
                state.calls.push(query.to_string());
                let outcome = state.outcomes.get(query).cloned();
                (outcome, state.delays.get(query).copied())
            };

            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            match outcome {
                Some(MockOutcome::Results(results)) => Ok(results),
                Some(MockOutcome::Status(status)) => Err(MovieSearchError::HttpStatus {
                    status,
                    url: "mock://search/movie".to_string(),
                }),
                Some(MockOutcome::Network(reason)) => Err(MovieSearchError::NetworkError { reason }),
                None => Ok(Self::generated_results(query)),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_records_calls_in_order() {
            let provider = MockMovieProvider::new();
            provider.search_movies("alien").await.unwrap();
            provider.search_movies("aliens").await.unwrap();

            assert_eq!(provider.calls(), vec!["alien", "aliens"]);
            assert_eq!(provider.call_count(), 2);
        }

        #[tokio::test]
        async fn test_scripted_outcomes() {
            let provider = MockMovieProvider::new();
            provider.respond_with("heat", vec![Suggestion::new(949, "Heat")]);
            provider.fail_with_status("broken", 500);
            provider.fail_with_network_error("offline", "connection refused");

            assert_eq!(provider.search_movies("heat").await.unwrap()[0].id, 949);
            assert!(matches!(
                provider.search_movies("broken").await,
                Err(MovieSearchError::HttpStatus { status: 500, .. })
            ));
            assert!(matches!(
                provider.search_movies("offline").await,
                Err(MovieSearchError::NetworkError { .. })
            ));
            assert_eq!(provider.search_movies("other").await.unwrap().len(), 3);
        }

        #[tokio::test(start_paused = true)]
        async fn test_delay_uses_tokio_clock() {
            let provider = MockMovieProvider::new();
            provider.delay("slow", Duration::from_secs(5));

            let start = tokio::time::Instant::now();
            provider.search_movies("slow").await.unwrap();

            assert!(start.elapsed() >= Duration::from_secs(5));
        }
    }
}
