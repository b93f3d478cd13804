//! Core feedback rules for the puzzle
//!
//! Pure functions and small value types with no terminal or I/O concerns:
//! the ordered per-letter result, the two-pass guess evaluation and the
//! keyboard aggregate built from submitted guesses.

mod feedback;
mod keyboard;

pub use feedback::{Feedback, evaluate, is_solved};
pub use keyboard::{KEYBOARD_ROWS, KeyResults};
