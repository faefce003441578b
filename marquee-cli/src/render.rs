//! Plain-text rendering for terminals

use marquee_core::SearchInputState;
use marquee_search::Suggestion;

/// One line per suggestion: position, title, year, detail route.
pub fn suggestion_lines(suggestions: &[Suggestion]) -> Vec<String> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            let year = suggestion
                .release_year()
                .map(|year| format!(" ({year})"))
                .unwrap_or_default();
            format!(
                "{:>2}. {}{year}  {}",
                index + 1,
                suggestion.title,
                suggestion.detail_route()
            )
        })
        .collect()
}

/// Text view of the whole component, mirroring the HTML layout.
pub fn state_text(state: &SearchInputState) -> String {
    let mut lines = vec![format!("[{}]", state.query)];

    if state.is_loading() {
        lines.push("  Cargando...".to_string());
    }
    if let Some(message) = state.error_message() {
        lines.push(format!("  ! {message}"));
    }
    lines.extend(
        suggestion_lines(state.visible_suggestions())
            .into_iter()
            .map(|line| format!("  {line}")),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use marquee_core::RequestState;

    use super::*;

    #[test]
    fn test_suggestion_lines_include_year_when_known() {
        let lines = suggestion_lines(&[
            Suggestion::new(27205, "Origen").with_release_date("2010-07-16"),
            Suggestion::new(1, "Sin fecha"),
        ]);

        assert_eq!(lines[0], " 1. Origen (2010)  /movie/27205");
        assert_eq!(lines[1], " 2. Sin fecha  /movie/1");
    }

    #[test]
    fn test_state_text_while_loading_hides_list() {
        let state = SearchInputState {
            query: "origen".to_string(),
            suggestions: vec![Suggestion::new(1, "Origen")],
            request_state: RequestState::Loading,
        };

        assert_eq!(state_text(&state), "[origen]\n  Cargando...");
    }

    #[test]
    fn test_state_text_with_error() {
        let state = SearchInputState {
            query: "origen".to_string(),
            suggestions: vec![],
            request_state: RequestState::Error {
                message: "Error al buscar sugerencias.".to_string(),
            },
        };

        assert_eq!(
            state_text(&state),
            "[origen]\n  ! Error al buscar sugerencias."
        );
    }
}
