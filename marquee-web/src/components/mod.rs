//! Reusable HTML components for the search input
//!
//! Components are server-rendered HTML fragments. All styling uses Tailwind
//! CSS; user-controlled text is escaped before insertion.

pub mod layout;
pub mod search_input;
pub mod suggestions;

// Re-export main component functions
pub use layout::{button, escape_html, text_input};
pub use search_input::{RenderOptions, search_input};
pub use suggestions::{error_marker, loading_marker, suggestion_item, suggestion_list};
