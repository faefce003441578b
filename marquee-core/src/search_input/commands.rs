//! Command definitions for the search input actor.

use marquee_search::{MovieSearchError, Suggestion};
use tokio::sync::oneshot;

use super::state::SearchInputState;

/// Commands that can be sent to the search input actor.
pub enum SearchInputCommand {
    /// The text field changed; reschedules the debounce timer.
    QueryChanged { query: String },
    /// Form submission. Responds with the navigated route, if any.
    Submit {
        responder: oneshot::Sender<Option<String>>,
    },
    /// Snapshot of the current state, ordered after earlier commands.
    GetState {
        responder: oneshot::Sender<SearchInputState>,
    },
    /// Stop the actor. In-flight fetches finish but their results are dropped.
    Shutdown { responder: oneshot::Sender<()> },
}

/// Result of a fetch task, reported back to the actor.
#[derive(Debug)]
pub struct FetchCompletion {
    /// Generation the fetch was started under
    pub generation: u64,
    /// Query that was searched
    pub query: String,
    pub result: Result<Vec<Suggestion>, MovieSearchError>,
}
