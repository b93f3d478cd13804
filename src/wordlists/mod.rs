//! Word lists for the daily puzzle
//!
//! The default lists are compiled into the binary; custom lists can be loaded
//! from plain text files with one word per line.

mod embedded;
mod error;
mod list;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, DEFAULT_START_DATE};
pub use error::WordListError;
pub use list::WordList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 2315);
        assert_eq!(ALLOWED_COUNT, 12965);
    }

    #[test]
    fn every_answer_is_an_allowed_guess() {
        let allowed: std::collections::HashSet<_> = ALLOWED.iter().collect();
        assert!(ANSWERS.iter().all(|word| allowed.contains(word)));
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_answers_are_unique() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn default_start_date() {
        assert_eq!(DEFAULT_START_DATE.to_string(), "2021-06-19");
    }
}
