//! The search input component: form, status and suggestions

use marquee_core::{MarqueeConfig, SearchInputState};

use super::layout::{button, escape_html, text_input};
use super::suggestions::{error_marker, loading_marker, suggestion_list};

/// Presentation settings for the search input.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix for poster paths
    pub image_base_url: String,
    /// Hint shown in the empty text field
    pub placeholder: String,
    /// Accessible name of the text field
    pub aria_label: String,
    /// Text of the loading marker
    pub loading_text: String,
    /// Content of the submit button
    pub submit_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&MarqueeConfig::default())
    }
}

impl RenderOptions {
    /// Takes the image CDN from the application configuration.
    pub fn from_config(config: &MarqueeConfig) -> Self {
        Self {
            image_base_url: config.tmdb.image_base_url.clone(),
            placeholder: "Busca una película...".to_string(),
            aria_label: "Buscar película".to_string(),
            loading_text: "Cargando...".to_string(),
            submit_label: "🔍".to_string(),
        }
    }
}

/// Renders the complete search input for a state snapshot.
///
/// Below the form, the loading marker, the error marker and the suggestion
/// list appear according to state. Suggestions never show while loading.
pub fn search_input(state: &SearchInputState, options: &RenderOptions) -> String {
    let status_html = if state.is_loading() {
        loading_marker(&options.loading_text)
    } else {
        String::new()
    };

    let error_html = state.error_message().map(error_marker).unwrap_or_default();

    let list_html = suggestion_list(state.visible_suggestions(), &options.image_base_url);

    let aria = format!(
        r#"aria-label="{}""#,
        escape_html(&options.aria_label)
    );

    // No action or method: the host intercepts submit and routes through the
    // trimming submit handler.
    format!(
        r#"<form role="search" class="search-form-interactive relative">
            <div class="input-wrapper flex space-x-2">
                {}
                {}
            </div>
            {status_html}
            {error_html}
            {list_html}
        </form>"#,
        text_input("q", &state.query, &options.placeholder, Some(&aria)),
        button(&options.submit_label, "primary", Some(r#"type="submit""#))
    )
}
