//! Navigation capability handed to the search input.
//!
//! Submitting a query leaves the component entirely, so where the user ends
//! up is decided by the host: a browser shell, a terminal, or a test.

use parking_lot::Mutex;

/// Full-page navigation target provider.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Leaves the current view for `target`, a root-relative route.
    fn navigate(&self, target: &str);
}

/// Sub-delims that browsers' `encodeURIComponent` leaves as-is.
const UNESCAPED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Route of the full search results page for a query.
///
/// Returns `None` when the trimmed query is empty, in which case nothing
/// should happen on submit. The query is encoded the way a browser's
/// `encodeURIComponent` does it.
pub fn search_results_route(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/?q={}", encode_query_component(trimmed)))
}

fn encode_query_component(value: &str) -> String {
    UNESCAPED_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}

/// Navigator that only logs the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!(target_route = target, "Navigating");
    }
}

/// Navigator that remembers every target, for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets navigated to so far, oldest first.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().clone()
    }

    pub fn last_target(&self) -> Option<String> {
        self.targets.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.targets.lock().push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_trims_and_encodes() {
        assert_eq!(
            search_results_route(" inception ").as_deref(),
            Some("/?q=inception")
        );
        assert_eq!(
            search_results_route("la vida es bella").as_deref(),
            Some("/?q=la%20vida%20es%20bella")
        );
        assert_eq!(
            search_results_route("amélie & co").as_deref(),
            Some("/?q=am%C3%A9lie%20%26%20co")
        );
    }

    #[test]
    fn test_route_keeps_marks_unescaped() {
        assert_eq!(
            search_results_route("(500) days of summer!").as_deref(),
            Some("/?q=(500)%20days%20of%20summer!")
        );
        assert_eq!(
            search_results_route("*batteries not included").as_deref(),
            Some("/?q=*batteries%20not%20included")
        );
        assert_eq!(
            search_results_route("ocean's eleven").as_deref(),
            Some("/?q=ocean's%20eleven")
        );
        // A literal escape sequence in the query is itself escaped
        assert_eq!(
            search_results_route("100%21").as_deref(),
            Some("/?q=100%2521")
        );
    }

    #[test]
    fn test_blank_query_has_no_route() {
        assert_eq!(search_results_route(""), None);
        assert_eq!(search_results_route("   "), None);
        assert_eq!(search_results_route("\t\n"), None);
    }

    #[test]
    fn test_recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("/?q=a");
        navigator.navigate("/?q=b");

        assert_eq!(navigator.targets(), vec!["/?q=a", "/?q=b"]);
        assert_eq!(navigator.last_target().as_deref(), Some("/?q=b"));
    }
}
