//! Actor implementation for the search input.

use std::sync::Arc;

use marquee_search::MovieSearchProvider;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

use super::commands::{FetchCompletion, SearchInputCommand};
use super::core::{FetchTicket, SearchInput};
use super::handle::SearchInputHandle;
use crate::config::SuggestConfig;
use crate::navigation::Navigator;

/// Spawns the search input actor and returns its handle.
///
/// The actor owns all component state and the debounce timer. Fetches run on
/// their own tasks so keystrokes keep flowing while a request is in flight.
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() {
/// use std::sync::Arc;
///
/// use marquee_core::config::MarqueeConfig;
/// use marquee_core::navigation::TracingNavigator;
/// use marquee_core::spawn_search_input;
/// use marquee_search::TmdbProvider;
///
/// let config = MarqueeConfig::from_env();
/// let provider = Arc::new(TmdbProvider::new(config.tmdb.clone()).unwrap());
/// let handle = spawn_search_input(config.suggest, provider, Arc::new(TracingNavigator));
/// handle.set_query("inception").await.unwrap();
/// # }
/// ```
pub fn spawn_search_input(
    config: SuggestConfig,
    provider: Arc<dyn MovieSearchProvider>,
    navigator: Arc<dyn Navigator>,
) -> SearchInputHandle {
    let (sender, receiver) = mpsc::channel(100);
    let (input, state_receiver) = SearchInput::new(config, navigator);

    tokio::spawn(async move {
        run_actor_loop(input, provider, receiver).await;
    });

    SearchInputHandle::new(sender, state_receiver)
}

/// Runs the main actor message processing loop.
///
/// Commands take priority over fetch completions, and both over the timer,
/// so a keystroke arriving at the deadline still reschedules.
async fn run_actor_loop(
    mut input: SearchInput,
    provider: Arc<dyn MovieSearchProvider>,
    mut receiver: mpsc::Receiver<SearchInputCommand>,
) {
    tracing::debug!("Search input actor started");

    let (completion_sender, mut completion_receiver) = mpsc::unbounded_channel();
    let debounce = input.config().debounce;
    let timer = sleep(debounce);
    tokio::pin!(timer);
    let mut timer_armed = false;

    loop {
        tokio::select! {
            biased;

            command = receiver.recv() => {
                let Some(command) = command else { break };
                match command {
                    SearchInputCommand::QueryChanged { query } => {
                        if input.set_query(query) {
                            timer.as_mut().reset(Instant::now() + debounce);
                            timer_armed = true;
                        }
                    }
                    SearchInputCommand::Submit { responder } => {
                        let _ = responder.send(input.submit());
                    }
                    SearchInputCommand::GetState { responder } => {
                        let _ = responder.send(input.state().clone());
                    }
                    SearchInputCommand::Shutdown { responder } => {
                        tracing::debug!("Search input actor shutting down");
                        let _ = responder.send(());
                        break;
                    }
                }
            }
            Some(completion) = completion_receiver.recv() => {
                let FetchCompletion { generation, query, result } = completion;
                input.complete_fetch(generation, &query, result);
            }
            () = &mut timer, if timer_armed => {
                timer_armed = false;
                if let Some(ticket) = input.begin_fetch() {
                    spawn_fetch(provider.clone(), ticket, completion_sender.clone());
                }
            }
        }
    }

    tracing::debug!("Search input actor stopped");
}

/// Runs one provider request and reports it back to the actor.
fn spawn_fetch(
    provider: Arc<dyn MovieSearchProvider>,
    ticket: FetchTicket,
    completions: mpsc::UnboundedSender<FetchCompletion>,
) {
    tokio::spawn(async move {
        let FetchTicket { generation, query } = ticket;
        let result = provider.search_movies(&query).await;
        // Actor may have shut down meanwhile
        let _ = completions.send(FetchCompletion {
            generation,
            query,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use marquee_search::MockMovieProvider;

    use super::*;
    use crate::navigation::RecordingNavigator;

    fn spawn_with_mock() -> (SearchInputHandle, Arc<MockMovieProvider>) {
        let provider = Arc::new(MockMovieProvider::new());
        let handle = spawn_search_input(
            SuggestConfig::default(),
            provider.clone(),
            Arc::new(RecordingNavigator::new()),
        );
        (handle, provider)
    }

    #[tokio::test]
    async fn test_actor_spawn_and_shutdown() {
        let (handle, _) = spawn_with_mock();
        assert!(handle.is_running());

        let state = handle.state().await.unwrap();
        assert_eq!(state.query, "");

        handle.shutdown().await.unwrap();

        // Give the actor time to shut down
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!handle.is_running());
        assert!(handle.state().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_fires_after_quiet_period() {
        let (handle, provider) = spawn_with_mock();

        handle.set_query("alien").await.unwrap();
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(provider.call_count(), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(provider.calls(), vec!["alien"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_query_does_not_reschedule() {
        let (handle, provider) = spawn_with_mock();

        handle.set_query("alien").await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        handle.set_query("alien").await.unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(provider.calls(), vec!["alien"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_completion_after_shutdown_is_dropped() {
        let (handle, provider) = spawn_with_mock();
        provider.delay("alien", Duration::from_secs(2));

        handle.set_query("alien").await.unwrap();
        tokio::time::sleep(Duration::from_millis(600)).await;
        handle.shutdown().await.unwrap();

        // Fetch task completes into a closed channel without panicking
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(provider.call_count(), 1);
    }
}
