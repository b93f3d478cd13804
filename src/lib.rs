//! Wordle Daily
//!
//! A daily word-guessing puzzle for the terminal. The answer is chosen from
//! the word list by calendar date, so every player gets the same word on the
//! same day and any past or future day can be replayed.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_daily::core::Feedback;
//! use wordle_daily::game::Game;
//! use wordle_daily::wordlists::{DEFAULT_START_DATE, WordList};
//!
//! let list = WordList::embedded(DEFAULT_START_DATE).unwrap();
//! let day = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
//! let mut game = Game::new(&list, day, 6);
//!
//! for letter in "CRANE".chars() {
//!     game.keypress(letter);
//! }
//! game.enter();
//!
//! // The first answer is CIGAR: C is in place, A and R are misplaced
//! assert_eq!(game.guess_results()[0][0], Feedback::Correct);
//! assert_eq!(game.key_results().get('R'), Feedback::WrongPos);
//! ```

// Feedback rules
pub mod core;

// Per-session game state
pub mod game;

// Word lists
pub mod wordlists;

// Command-line configuration
pub mod config;

// Log file setup
pub mod logging;

// Line-based mode
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
