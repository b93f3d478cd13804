//! The puzzle corpus: daily answers, accepted guesses and the start date

use super::embedded::{ALLOWED, ANSWERS};
use super::loader::{load_words, normalize_words};
use super::WordListError;
use chrono::{Days, NaiveDate};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Immutable word corpus shared by every game
///
/// `answers[0]` is the answer on `start_date`, `answers[1]` the day after,
/// and so on, wrapping around at the end of the list.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<String>,
    allowed: Vec<String>,
    start_date: NaiveDate,
    word_length: usize,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from raw lines
    ///
    /// Lines are normalised with [`normalize_words`]. With no `allowed`
    /// source, only answers are accepted as guesses.
    ///
    /// # Errors
    ///
    /// - `WordListError::NoAnswers` if no answer survives normalisation
    /// - `WordListError::LengthMismatch` if any answer or allowed word differs
    ///   in length from the first answer
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_daily::wordlists::WordList;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let list = WordList::from_lines(["crane", "slate"], None::<[&str; 0]>, start).unwrap();
    ///
    /// assert_eq!(list.word_length(), 5);
    /// assert_eq!(list.answer_for(start), (0, "CRANE".to_string()));
    /// ```
    pub fn from_lines<A, B, S, T>(
        answers: A,
        allowed: Option<B>,
        start_date: NaiveDate,
    ) -> Result<Self, WordListError>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let answers = normalize_words(answers);
        let allowed = allowed.map(normalize_words).unwrap_or_default();
        Self::new(answers, allowed, start_date)
    }

    /// Load answers (and optionally accepted guesses) from files
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if a file cannot be read, otherwise the
    /// same validation errors as [`WordList::from_lines`].
    pub fn from_files(
        answers_path: &Path,
        allowed_path: Option<&Path>,
        start_date: NaiveDate,
    ) -> Result<Self, WordListError> {
        let answers = load_words(answers_path)?;
        let allowed = allowed_path.map(load_words).transpose()?.unwrap_or_default();
        Self::new(answers, allowed, start_date)
    }

    /// The word list compiled into the binary, cycling from `start_date`
    ///
    /// [`DEFAULT_START_DATE`](super::DEFAULT_START_DATE) lines the days up
    /// with the published puzzle.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded data is inconsistent.
    pub fn embedded(start_date: NaiveDate) -> Result<Self, WordListError> {
        Self::from_lines(ANSWERS, Some(ALLOWED), start_date)
    }

    fn new(
        answers: Vec<String>,
        allowed: Vec<String>,
        start_date: NaiveDate,
    ) -> Result<Self, WordListError> {
        let word_length = answers.first().ok_or(WordListError::NoAnswers)?.len();

        if let Some(word) = answers
            .iter()
            .chain(&allowed)
            .find(|word| word.len() != word_length)
        {
            return Err(WordListError::LengthMismatch {
                word: word.clone(),
                expected: word_length,
                found: word.len(),
            });
        }

        let accepted = answers.iter().chain(&allowed).cloned().collect();

        log::info!(
            "word list ready: {} answers, {} allowed, {word_length} letters, starting {start_date}",
            answers.len(),
            allowed.len(),
        );

        Ok(Self {
            answers,
            allowed,
            start_date,
            word_length,
            accepted,
        })
    }

    /// Day index and uppercase answer for `date`
    ///
    /// The index is the number of whole days since the start date, clamped
    /// to 0 for earlier dates and wrapped modulo the number of answers.
    #[must_use]
    pub fn answer_for(&self, date: NaiveDate) -> (usize, String) {
        let elapsed = (date - self.start_date).num_days().max(0);
        let day = (elapsed as u64 % self.answers.len() as u64) as usize;
        (day, self.answers[day].to_uppercase())
    }

    /// The date on which `day` is the answer, within the first cycle
    #[must_use]
    pub fn date_for_day(&self, day: usize) -> NaiveDate {
        self.start_date + Days::new((day % self.answers.len()) as u64)
    }

    /// Case-insensitive membership in answers or accepted guesses
    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.accepted.contains(&word.to_lowercase())
    }

    /// A uniformly chosen date from the first answer cycle
    ///
    /// The random source is supplied by the caller so results can be
    /// reproduced with a seeded generator.
    pub fn random_date<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        self.date_for_day(rng.random_range(0..self.answers.len()))
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_START_DATE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NO_LINES: Option<[&str; 0]> = None;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn three_day_list() -> WordList {
        WordList::from_lines(
            ["crane", "slate", "irate"],
            Some(["adieu", "audio"]),
            date(2023, 1, 1),
        )
        .unwrap()
    }

    #[test]
    fn answer_for_start_date_is_first_answer() {
        let list = three_day_list();
        assert_eq!(list.answer_for(date(2023, 1, 1)), (0, "CRANE".to_string()));
        assert_eq!(list.answer_for(date(2023, 1, 2)), (1, "SLATE".to_string()));
        assert_eq!(list.answer_for(date(2023, 1, 3)), (2, "IRATE".to_string()));
    }

    #[test]
    fn answer_for_wraps_around() {
        let list = three_day_list();
        assert_eq!(list.answer_for(date(2023, 1, 4)), (0, "CRANE".to_string()));
        assert_eq!(list.answer_for(date(2023, 1, 8)), (1, "SLATE".to_string()));
    }

    #[test]
    fn answer_for_before_start_clamps_to_zero() {
        let list = three_day_list();
        assert_eq!(list.answer_for(date(2022, 12, 31)), (0, "CRANE".to_string()));
        assert_eq!(list.answer_for(date(1999, 6, 1)), (0, "CRANE".to_string()));
    }

    #[test]
    fn answer_for_is_deterministic() {
        let list = three_day_list();
        let day = date(2024, 2, 29);
        assert_eq!(list.answer_for(day), list.answer_for(day));
    }

    #[test]
    fn date_for_day_inverts_answer_for() {
        let list = three_day_list();
        for day in 0..3 {
            assert_eq!(list.answer_for(list.date_for_day(day)).0, day);
        }
    }

    #[test]
    fn is_allowed_is_case_insensitive() {
        let list = three_day_list();
        assert!(list.is_allowed("CRANE"));
        assert!(list.is_allowed("crane"));
        assert!(list.is_allowed("AuDiO"));
        assert!(!list.is_allowed("zzzzz"));
    }

    #[test]
    fn without_allowed_source_only_answers_accepted() {
        let list = WordList::from_lines(["crane", "slate"], NO_LINES, date(2023, 1, 1)).unwrap();
        assert!(list.allowed().is_empty());
        assert!(list.is_allowed("SLATE"));
        assert!(!list.is_allowed("AUDIO"));
    }

    #[test]
    fn construction_normalises_and_filters() {
        let list =
            WordList::from_lines(["  CRANE ", "", "sl@te", "Irate"], NO_LINES, date(2023, 1, 1))
                .unwrap();
        assert_eq!(list.answers(), &["crane", "irate"]);
    }

    #[test]
    fn empty_answers_rejected() {
        let err = WordList::from_lines(["", "1234", "no way"], NO_LINES, date(2023, 1, 1))
            .unwrap_err();
        assert!(matches!(err, WordListError::NoAnswers));
    }

    #[test]
    fn mismatched_answer_length_rejected() {
        let err = WordList::from_lines(["crane", "toolong"], NO_LINES, date(2023, 1, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            WordListError::LengthMismatch { expected: 5, found: 7, .. }
        ));
    }

    #[test]
    fn mismatched_allowed_length_rejected() {
        let err = WordList::from_lines(["crane"], Some(["audio", "cat"]), date(2023, 1, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            WordListError::LengthMismatch { expected: 5, found: 3, .. }
        ));
    }

    #[test]
    fn other_word_lengths_supported() {
        let list =
            WordList::from_lines(["planet", "rocket"], NO_LINES, date(2023, 1, 1)).unwrap();
        assert_eq!(list.word_length(), 6);
        assert_eq!(list.answer_for(date(2023, 1, 2)).1, "ROCKET");
    }

    #[test]
    fn single_answer_end_to_end() {
        let start = date(2023, 1, 1);
        let list = WordList::from_lines(["CRANE"], NO_LINES, start).unwrap();

        assert_eq!(list.word_length(), 5);
        assert_eq!(list.answer_for(start), (0, "CRANE".to_string()));

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(list.random_date(&mut rng), start);
        }
    }

    #[test]
    fn random_date_stays_in_first_cycle() {
        let list = three_day_list();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let picked = list.random_date(&mut rng);
            assert!(picked >= date(2023, 1, 1) && picked <= date(2023, 1, 3));
        }
    }

    #[test]
    fn random_date_reproducible_with_seed() {
        let list = three_day_list();
        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| list.random_date(&mut rng)).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| list.random_date(&mut rng)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn embedded_list_is_consistent() {
        let list = WordList::embedded(DEFAULT_START_DATE).unwrap();
        assert_eq!(list.word_length(), 5);
        assert_eq!(list.start_date(), DEFAULT_START_DATE);
        assert_eq!(list.answer_for(DEFAULT_START_DATE), (0, "CIGAR".to_string()));
    }

    #[test]
    fn embedded_list_cycles_over_full_answer_set() {
        let list = WordList::embedded(DEFAULT_START_DATE).unwrap();
        assert_eq!(list.answers().len(), 2315);

        assert_eq!(list.answer_for(date(2026, 10, 16)).0, 1945);
        assert_eq!(list.answer_for(date(2027, 10, 21)).0, 0);
        assert_eq!(list.date_for_day(2314), date(2027, 10, 20));
    }

    #[test]
    fn embedded_list_accepts_everyday_words() {
        let list = WordList::embedded(DEFAULT_START_DATE).unwrap();
        for word in ["water", "THERE", "house", "about", "crane", "salet", "aahed", "zymic"] {
            assert!(list.is_allowed(word), "{word} should be accepted");
        }
        assert!(!list.is_allowed("zzzzz"));
    }
}
