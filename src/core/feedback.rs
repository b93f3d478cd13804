//! Per-letter feedback for a submitted guess
//!
//! Each letter of a guess is classified as one of four ordered results:
//! - `Unknown` (not yet guessed, only meaningful on the keyboard)
//! - `NotIncluded` (letter not in the answer, or all copies already credited)
//! - `WrongPos` (letter in the answer, different position)
//! - `Correct` (letter in the correct position)
//!
//! The ordering is significant: keyboard aggregation only upgrades a letter
//! to `WrongPos` from a lower result.

use rustc_hash::FxHashMap;

/// Feedback for a single letter, ordered worst to best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// No information yet
    #[default]
    Unknown,
    /// Letter is absent from the answer (or over-guessed)
    NotIncluded,
    /// Letter is in the answer but elsewhere
    WrongPos,
    /// Letter is in the right place
    Correct,
}

impl Feedback {
    /// Emoji tile for sharing and the text-mode display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Unknown => '⬛',
            Self::NotIncluded => '⬜',
            Self::WrongPos => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Evaluate `guess` against `answer`, one result per position
///
/// Both slices must be the same length and use the same letter case.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct`; every other position is
///    provisionally `NotIncluded` and its answer letter earns one credit
/// 2. Second pass: each provisional `NotIncluded` whose guessed letter still
///    has credit becomes `WrongPos`, spending one credit
///
/// So a letter never receives more `WrongPos`/`Correct` marks than it has
/// occurrences in the answer.
///
/// # Examples
/// ```
/// use wordle_daily::core::{evaluate, Feedback::*};
///
/// let guess: Vec<char> = "BOBBY".chars().collect();
/// let answer: Vec<char> = "ABBEY".chars().collect();
///
/// // Two B's in the answer: one placed, one left for the first B guessed
/// assert_eq!(
///     evaluate(&guess, &answer),
///     vec![WrongPos, NotIncluded, Correct, NotIncluded, Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], answer: &[char]) -> Vec<Feedback> {
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let mut results = vec![Feedback::NotIncluded; answer.len()];
    // Answer letters not matched in place, available for yellows
    let mut credits: FxHashMap<char, usize> = FxHashMap::default();

    for (i, (&guessed, &expected)) in guess.iter().zip(answer).enumerate() {
        if guessed == expected {
            results[i] = Feedback::Correct;
        } else {
            *credits.entry(expected).or_insert(0) += 1;
        }
    }

    for (result, guessed) in results.iter_mut().zip(guess) {
        if *result != Feedback::NotIncluded {
            continue;
        }
        if let Some(credit) = credits.get_mut(guessed)
            && *credit > 0
        {
            *result = Feedback::WrongPos;
            *credit -= 1;
        }
    }

    results
}

/// True when every position is `Correct`
#[must_use]
pub fn is_solved(results: &[Feedback]) -> bool {
    !results.is_empty() && results.iter().all(|&r| r == Feedback::Correct)
}
