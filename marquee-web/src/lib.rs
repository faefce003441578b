//! Marquee Web - Server-rendered search input

#![warn(missing_docs)]
#![warn(clippy::too_many_lines)]
//!
//! Turns search input state snapshots into HTML fragments. Rendering is a
//! pure function of state, so hosts can re-render on every published change.

pub mod components;

// Re-export main types
pub use components::{RenderOptions, search_input};
