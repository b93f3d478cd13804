//! Word list configuration errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a word list cannot be built
#[derive(Debug, Error)]
pub enum WordListError {
    /// No usable answers remained after filtering
    #[error("loading wordlist: no valid words found")]
    NoAnswers,

    /// A word's length differs from the first answer's
    #[error("loading wordlist: '{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A word list file could not be read
    #[error("loading wordlist: cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
