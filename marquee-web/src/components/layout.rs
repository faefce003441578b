//! Layout primitives - buttons, inputs, escaping

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a button with Tailwind styling.
///
/// Variants: `primary`, anything else renders neutral. `content` is inserted
/// as-is so it may carry markup; callers escape user text themselves.
pub fn button(content: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-marquee-500 hover:bg-marquee-600 text-white focus:ring-marquee-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{content}</button>"#)
}

/// Renders a text input bound to `value`.
///
/// `value` and `placeholder` are escaped; `attributes` is trusted markup.
pub fn text_input(name: &str, value: &str, placeholder: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");
    let value = escape_html(value);
    let placeholder = escape_html(placeholder);

    format!(
        r#"<input type="text" name="{name}" value="{value}" placeholder="{placeholder}" autocomplete="off"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                  {attrs} />"#
    )
}
