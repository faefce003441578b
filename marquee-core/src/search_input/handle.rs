//! Handle for communicating with the search input actor.

use tokio::sync::{mpsc, oneshot, watch};

use super::SearchInputError;
use super::commands::SearchInputCommand;
use super::state::SearchInputState;

/// Handle for communicating with the search input actor.
///
/// Cheap to clone. Every clone drives the same component instance.
#[derive(Clone)]
pub struct SearchInputHandle {
    sender: mpsc::Sender<SearchInputCommand>,
    state_receiver: watch::Receiver<SearchInputState>,
}

impl SearchInputHandle {
    /// Creates a new handle with the given command sender and state channel.
    pub fn new(
        sender: mpsc::Sender<SearchInputCommand>,
        state_receiver: watch::Receiver<SearchInputState>,
    ) -> Self {
        Self {
            sender,
            state_receiver,
        }
    }

    /// Replaces the text field contents, as on every keystroke.
    ///
    /// Schedules a suggestion fetch once the input has been quiet for the
    /// configured debounce period.
    ///
    /// # Errors
    /// - `SearchInputError::ActorShutdown` - Actor is no longer running
    pub async fn set_query(&self, query: impl Into<String>) -> Result<(), SearchInputError> {
        let cmd = SearchInputCommand::QueryChanged {
            query: query.into(),
        };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchInputError::ActorShutdown)
    }

    /// Submits the form.
    ///
    /// Returns the route that was navigated to, or `None` when the trimmed
    /// query is empty and nothing happened.
    ///
    /// # Errors
    /// - `SearchInputError::ActorShutdown` - Actor is no longer running
    pub async fn submit(&self) -> Result<Option<String>, SearchInputError> {
        let (responder, rx) = oneshot::channel();
        let cmd = SearchInputCommand::Submit { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchInputError::ActorShutdown)?;

        rx.await.map_err(|_| SearchInputError::ActorShutdown)
    }

    /// Gets a state snapshot after all previously sent commands were applied.
    ///
    /// # Errors
    /// - `SearchInputError::ActorShutdown` - Actor is no longer running
    pub async fn state(&self) -> Result<SearchInputState, SearchInputError> {
        let (responder, rx) = oneshot::channel();
        let cmd = SearchInputCommand::GetState { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchInputError::ActorShutdown)?;

        rx.await.map_err(|_| SearchInputError::ActorShutdown)
    }

    /// Subscribes to state changes for re-rendering.
    pub fn subscribe(&self) -> watch::Receiver<SearchInputState> {
        self.state_receiver.clone()
    }

    /// Stops the actor. Pending timers are dropped and in-flight fetch
    /// results are discarded.
    ///
    /// # Errors
    /// - `SearchInputError::ActorShutdown` - Actor had already stopped
    pub async fn shutdown(&self) -> Result<(), SearchInputError> {
        let (responder, rx) = oneshot::channel();
        let cmd = SearchInputCommand::Shutdown { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchInputError::ActorShutdown)?;

        rx.await.map_err(|_| SearchInputError::ActorShutdown)
    }

    /// Checks if the actor is still running.
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}
