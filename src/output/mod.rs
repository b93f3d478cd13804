//! Terminal output formatting
//!
//! Coloured tiles and emoji summaries for the line-based mode.

pub mod formatters;

pub use formatters::{colored_row, emoji_row, share_text};
