//! Observable state of the search input.

use marquee_search::Suggestion;
use serde::Serialize;

/// Status of the suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestState {
    /// No request running and the last one (if any) succeeded.
    #[default]
    Idle,
    /// A request for the current generation is in flight.
    Loading,
    /// The last request failed; `message` is safe to show to users.
    Error { message: String },
}

/// Snapshot of everything the renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchInputState {
    /// Text field contents, exactly as typed
    pub query: String,
    /// Latest accepted suggestions, already truncated, in API order
    pub suggestions: Vec<Suggestion>,
    pub request_state: RequestState,
}

impl SearchInputState {
    pub fn is_loading(&self) -> bool {
        self.request_state == RequestState::Loading
    }

    /// User-facing error message, if the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.request_state {
            RequestState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Suggestions that should be displayed right now.
    ///
    /// Empty while loading, even if older suggestions are still held.
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        if self.is_loading() {
            &[]
        } else {
            &self.suggestions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(request_state: RequestState) -> SearchInputState {
        SearchInputState {
            query: "heat".to_string(),
            suggestions: vec![Suggestion::new(949, "Heat")],
            request_state,
        }
    }

    #[test]
    fn test_suggestions_hidden_while_loading() {
        let state = state_with(RequestState::Loading);
        assert!(state.is_loading());
        assert!(state.visible_suggestions().is_empty());
    }

    #[test]
    fn test_suggestions_visible_when_idle_or_error() {
        assert_eq!(state_with(RequestState::Idle).visible_suggestions().len(), 1);

        let errored = state_with(RequestState::Error {
            message: "Error al buscar sugerencias.".to_string(),
        });
        assert_eq!(errored.visible_suggestions().len(), 1);
        assert_eq!(errored.error_message(), Some("Error al buscar sugerencias."));
    }

    #[test]
    fn test_serializes_status_tag() {
        let json = serde_json::to_value(state_with(RequestState::Error {
            message: "boom".to_string(),
        }))
        .unwrap();

        assert_eq!(json["request_state"]["status"], "error");
        assert_eq!(json["request_state"]["message"], "boom");
        assert_eq!(json["suggestions"][0]["id"], 949);
    }
}
