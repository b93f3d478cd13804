//! Keyboard feedback aggregated across submitted guesses

use super::Feedback;
use rustc_hash::FxHashMap;

/// Keyboard layout used by the renderers: letters per row and indent in keys
pub const KEYBOARD_ROWS: [(&str, u16); 3] =
    [("QWERTYUIOP", 0), ("ASDFGHJKL", 1), ("ZXCVBNM", 3)];

/// Best-known feedback per letter
///
/// Letters that have never been guessed are `Unknown`; a missing entry is
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResults {
    results: FxHashMap<char, Feedback>,
}

impl KeyResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback recorded for `letter`, `Unknown` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Feedback {
        self.results.get(&letter).copied().unwrap_or_default()
    }

    /// Merge one submitted guess into the aggregate
    ///
    /// Each letter is judged on its own, independently of the per-position
    /// results: an in-place match sets `Correct`; a letter found elsewhere in
    /// the answer is raised to `WrongPos` but never lowered from `Correct`;
    /// any other letter is set to `NotIncluded` unconditionally, with no
    /// guard against what was stored before.
    pub fn record(&mut self, guess: &[char], answer: &[char]) {
        for (&guessed, &expected) in guess.iter().zip(answer) {
            if guessed == expected {
                self.results.insert(guessed, Feedback::Correct);
            } else if answer.contains(&guessed) {
                let entry = self.results.entry(guessed).or_default();
                if *entry < Feedback::WrongPos {
                    *entry = Feedback::WrongPos;
                }
            } else {
                self.results.insert(guessed, Feedback::NotIncluded);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn unknown_by_default() {
        let keys = KeyResults::new();
        assert!(keys.is_empty());
        for letter in 'A'..='Z' {
            assert_eq!(keys.get(letter), Feedback::Unknown);
        }
    }

    #[test]
    fn record_classifies_each_letter() {
        let mut keys = KeyResults::new();
        keys.record(&letters("CRATE"), &letters("CRANE"));

        assert_eq!(keys.get('C'), Feedback::Correct);
        assert_eq!(keys.get('R'), Feedback::Correct);
        assert_eq!(keys.get('A'), Feedback::Correct);
        assert_eq!(keys.get('T'), Feedback::NotIncluded);
        assert_eq!(keys.get('E'), Feedback::Correct);
        assert_eq!(keys.get('N'), Feedback::Unknown);
    }

    #[test]
    fn correct_is_not_lowered_to_wrong_pos() {
        let mut keys = KeyResults::new();
        keys.record(&letters("CRANE"), &letters("CRANE"));
        assert_eq!(keys.get('E'), Feedback::Correct);

        // E in the answer but not at position 1 of this guess
        keys.record(&letters("HEIST"), &letters("CRANE"));
        assert_eq!(keys.get('E'), Feedback::Correct);
    }

    #[test]
    fn wrong_pos_upgrades_to_correct() {
        let mut keys = KeyResults::new();
        keys.record(&letters("EARTH"), &letters("CRANE"));
        assert_eq!(keys.get('E'), Feedback::WrongPos);

        keys.record(&letters("CRANE"), &letters("CRANE"));
        assert_eq!(keys.get('E'), Feedback::Correct);
    }

    #[test]
    fn later_copy_in_row_does_not_lower_correct() {
        // B: WrongPos at 0, Correct at 2, then WrongPos again at 3 is ignored
        let mut keys = KeyResults::new();
        keys.record(&letters("BOBBY"), &letters("ABBEY"));

        assert_eq!(keys.get('B'), Feedback::Correct);
        assert_eq!(keys.get('O'), Feedback::NotIncluded);
        assert_eq!(keys.get('Y'), Feedback::Correct);
    }

    #[test]
    fn not_included_branch_has_no_guard() {
        // The absent-letter branch writes unconditionally; with a different
        // answer it overwrites whatever was stored before
        let mut keys = KeyResults::new();
        keys.record(&letters("CRANE"), &letters("CRANE"));
        assert_eq!(keys.get('C'), Feedback::Correct);

        keys.record(&letters("CLOUD"), &letters("SLOTH"));
        assert_eq!(keys.get('C'), Feedback::NotIncluded);
    }
}
