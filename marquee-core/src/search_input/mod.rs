//! Search input component with debounced suggestion fetching
//!
//! The component runs as an actor: a single task owns the query, the
//! suggestion list, the request status and the debounce timer. Callers talk
//! to it through a cloneable [`SearchInputHandle`] and observe state changes
//! through a watch channel.

pub mod actor;
pub mod commands;
pub mod core;
pub mod handle;
pub mod state;

pub use actor::spawn_search_input;
pub use commands::SearchInputCommand;
pub use core::{FetchDisposition, FetchTicket, SearchInput};
pub use handle::SearchInputHandle;
pub use state::{RequestState, SearchInputState};

/// Errors returned by the search input handle.
#[derive(Debug, thiserror::Error)]
pub enum SearchInputError {
    /// The actor task is no longer running.
    #[error("Search input actor has shut down")]
    ActorShutdown,
}
