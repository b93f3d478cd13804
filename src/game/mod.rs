//! Game engine
//!
//! Tracks the rows typed by the player, scores submitted guesses, and moves
//! from in-progress to won or lost.

mod engine;

pub use engine::{Game, GameInput, GameStatus};

/// Rows per game unless configured otherwise
pub const DEFAULT_GUESSES: usize = 6;
