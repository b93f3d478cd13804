//! Word list loading utilities
//!
//! Turns raw lines (from a file or an embedded slice) into normalised words.

use super::WordListError;
use std::fs;
use std::path::Path;

/// Normalise raw lines into candidate words
///
/// Each line is trimmed and lowercased. Empty lines and lines containing
/// anything outside `a`-`z` are dropped without error.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::normalize_words;
///
/// let words = normalize_words(["  Crane", "", "it's", "SLATE\r"]);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
pub fn normalize_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim().to_lowercase();
            let only_letters = word.bytes().all(|b| b.is_ascii_lowercase());
            (!word.is_empty() && only_letters).then_some(word)
        })
        .collect()
}

/// Load and normalise the words in a file, one per line
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_words;
///
/// let words = load_words("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = normalize_words(content.lines());
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
