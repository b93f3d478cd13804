//! Runtime configuration resolved from the command line

use crate::game::DEFAULT_GUESSES;
use crate::wordlists::{DEFAULT_START_DATE, WordList};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rand::Rng;
use std::path::PathBuf;

/// Which day to open on start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateChoice {
    /// The local calendar day
    #[default]
    Today,
    Fixed(NaiveDate),
    /// A random day from the answer cycle
    Random,
}

/// Everything needed to start a session
#[derive(Debug, Clone)]
pub struct Config {
    pub date: DateChoice,
    pub num_guesses: usize,
    /// Custom answers file; the embedded list is used when absent
    pub answers: Option<PathBuf>,
    /// Extra accepted guesses, only read together with `answers`
    pub allowed: Option<PathBuf>,
    /// Day of the first answer; defaults to the embedded list's start
    pub start_date: Option<NaiveDate>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date: DateChoice::Today,
            num_guesses: DEFAULT_GUESSES,
            answers: None,
            allowed: None,
            start_date: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Reject settings the game cannot start with
    ///
    /// # Errors
    ///
    /// Fails if the guess count is 0 or an allowed list is given without
    /// an answers list.
    pub fn validate(&self) -> Result<()> {
        if self.num_guesses < 1 {
            bail!("number of guesses must be at least 1");
        }
        if self.allowed.is_some() && self.answers.is_none() {
            bail!("--allowed requires --answers");
        }
        Ok(())
    }

    /// Build the word list from files or the embedded data
    ///
    /// # Errors
    ///
    /// Returns the underlying `WordListError` with the offending source as
    /// context.
    pub fn load_word_list(&self) -> Result<WordList> {
        let start_date = self.start_date.unwrap_or(DEFAULT_START_DATE);

        match &self.answers {
            Some(answers) => WordList::from_files(answers, self.allowed.as_deref(), start_date)
                .with_context(|| format!("invalid word list {}", answers.display())),
            None => WordList::embedded(start_date).context("invalid embedded word list"),
        }
    }

    /// The day to open, given today's date and a random source
    #[must_use]
    pub fn resolve_date<R: Rng>(&self, list: &WordList, today: NaiveDate, rng: &mut R) -> NaiveDate {
        match self.date {
            DateChoice::Today => today,
            DateChoice::Fixed(date) => date,
            DateChoice::Random => list.random_date(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_daily_config_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_config_is_valid_and_uses_embedded_list() {
        let config = Config::default();
        config.validate().unwrap();

        let list = config.load_word_list().unwrap();
        assert_eq!(list.start_date(), DEFAULT_START_DATE);
        assert_eq!(list.answers().len(), ANSWERS.len());
    }

    #[test]
    fn zero_guesses_rejected() {
        let config = Config {
            num_guesses: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn allowed_without_answers_rejected() {
        let config = Config {
            allowed: Some(PathBuf::from("allowed.txt")),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--allowed requires --answers"));
    }

    #[test]
    fn start_date_override_applies_to_embedded_list() {
        let config = Config {
            start_date: Some(date(2024, 1, 1)),
            ..Config::default()
        };
        let list = config.load_word_list().unwrap();
        assert_eq!(list.answer_for(date(2024, 1, 1)), (0, "CIGAR".to_string()));
    }

    #[test]
    fn loads_custom_files() {
        let answers = temp_file("answers.txt", "Crane\nslate\n\nbad!\n");
        let allowed = temp_file("allowed.txt", "audio\n");
        let config = Config {
            answers: Some(answers.clone()),
            allowed: Some(allowed.clone()),
            start_date: Some(date(2023, 1, 1)),
            ..Config::default()
        };

        let list = config.load_word_list().unwrap();
        fs::remove_file(answers).unwrap();
        fs::remove_file(allowed).unwrap();

        assert_eq!(list.answers(), &["crane", "slate"]);
        assert!(list.is_allowed("AUDIO"));
    }

    #[test]
    fn missing_answers_file_reports_path() {
        let config = Config {
            answers: Some(PathBuf::from("/nonexistent/wordle_daily.txt")),
            ..Config::default()
        };
        let err = config.load_word_list().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/wordle_daily.txt"));
    }

    #[test]
    fn resolve_date_choices() {
        let list = Config::default().load_word_list().unwrap();
        let today = date(2026, 10, 16);
        let mut rng = StdRng::seed_from_u64(5);

        let config = Config::default();
        assert_eq!(config.resolve_date(&list, today, &mut rng), today);

        let config = Config {
            date: DateChoice::Fixed(date(2022, 2, 2)),
            ..Config::default()
        };
        assert_eq!(config.resolve_date(&list, today, &mut rng), date(2022, 2, 2));

        let config = Config {
            date: DateChoice::Random,
            ..Config::default()
        };
        let picked = config.resolve_date(&list, today, &mut rng);
        assert!(list.answer_for(picked).0 < list.answers().len());
        assert!(picked >= list.start_date());
    }
}
