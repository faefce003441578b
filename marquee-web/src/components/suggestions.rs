//! Suggestion list and request status markers

use marquee_search::Suggestion;

use super::layout::escape_html;

/// Renders one suggestion linking to the movie detail page.
///
/// Shows the poster thumbnail (or a placeholder block), the title, and the
/// release year when the date can be parsed.
pub fn suggestion_item(suggestion: &Suggestion, image_base_url: &str) -> String {
    let title = escape_html(&suggestion.title);

    let thumb_html = suggestion
        .poster_url(image_base_url)
        .map(|src| {
            format!(
                r#"<img src="{}" alt="Póster de {title}" class="w-10 h-14 object-cover rounded" loading="lazy" />"#,
                escape_html(&src)
            )
        })
        .unwrap_or_else(|| {
            r#"<div class="placeholder-thumb w-10 h-14 bg-gray-700 rounded"></div>"#.to_string()
        });

    let year_html = suggestion
        .release_year()
        .map(|year| format!(r#"<small class="text-gray-400 ml-1">({year})</small>"#))
        .unwrap_or_default();

    format!(
        r#"<li class="suggestion-item">
            <a href="{}" class="flex items-center space-x-3 px-3 py-2 hover:bg-gray-700">
                {thumb_html}
                <div class="suggestion-info min-w-0">
                    <span class="text-white truncate">{title}</span>{year_html}
                </div>
            </a>
        </li>"#,
        suggestion.detail_route()
    )
}

/// Renders the suggestion dropdown. Empty input renders nothing.
pub fn suggestion_list(suggestions: &[Suggestion], image_base_url: &str) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let items: String = suggestions
        .iter()
        .map(|s| suggestion_item(s, image_base_url))
        .collect();

    format!(
        r#"<ul class="suggestions-list absolute z-10 w-full mt-1 bg-gray-800 border border-gray-700 rounded-lg divide-y divide-gray-700">{items}</ul>"#
    )
}

/// Renders the loading marker.
pub fn loading_marker(text: &str) -> String {
    format!(
        r#"<div class="suggestions-status text-gray-400 text-sm mt-2" role="status">{}</div>"#,
        escape_html(text)
    )
}

/// Renders the error marker.
pub fn error_marker(message: &str) -> String {
    format!(
        r#"<div class="suggestions-error text-red-400 text-sm mt-2" role="alert">{}</div>"#,
        escape_html(message)
    )
}
