//! Per-session game state
//!
//! A [`Game`] is created for one date and one word list and is never
//! re-targeted: navigating to another day means building a new game.

use crate::core::{Feedback, KeyResults, evaluate, is_solved};
use crate::wordlists::WordList;
use chrono::NaiveDate;

/// Input accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// An uppercase letter `A`-`Z`
    Letter(char),
    Enter,
    Backspace,
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A single puzzle in progress
///
/// Input that does not apply in the current state is silently ignored;
/// callers re-read the state after every input to redraw.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    word_list: &'a WordList,
    guesses: Vec<Vec<char>>,
    guess_results: Vec<Vec<Feedback>>,
    key_results: KeyResults,
    answer: Vec<char>,
    date: NaiveDate,
    day: usize,
    won: bool,
    game_over: bool,
    current_row: usize,
}

impl<'a> Game<'a> {
    /// Start the puzzle for `date` with `num_guesses` rows
    ///
    /// # Panics
    /// Panics if `num_guesses` is 0.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_daily::game::{Game, GameStatus};
    /// use wordle_daily::wordlists::WordList;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let list = WordList::from_lines(["crane"], None::<[&str; 0]>, start).unwrap();
    /// let mut game = Game::new(&list, start, 6);
    ///
    /// for letter in "CRANE".chars() {
    ///     game.keypress(letter);
    /// }
    /// game.enter();
    ///
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn new(word_list: &'a WordList, date: NaiveDate, num_guesses: usize) -> Self {
        assert!(num_guesses >= 1, "number of guesses must be at least 1");

        let (day, answer) = word_list.answer_for(date);
        log::debug!("new game for {date}: day #{day}, {num_guesses} guesses");

        Self {
            word_list,
            guesses: vec![Vec::with_capacity(word_list.word_length()); num_guesses],
            guess_results: vec![Vec::new(); num_guesses],
            key_results: KeyResults::new(),
            answer: answer.chars().collect(),
            date,
            day,
            won: false,
            game_over: false,
            current_row: 0,
        }
    }

    /// Dispatch one input
    pub fn apply(&mut self, input: GameInput) {
        match input {
            GameInput::Letter(letter) => self.keypress(letter),
            GameInput::Enter => self.enter(),
            GameInput::Backspace => self.backspace(),
        }
    }

    /// Append `letter` to the current row
    ///
    /// Ignored unless `letter` is `A`-`Z`, the game is not won, and the
    /// current row exists and is not yet full.
    pub fn keypress(&mut self, letter: char) {
        if !letter.is_ascii_uppercase() || self.won {
            return;
        }
        let word_length = self.word_length();
        if let Some(row) = self.guesses.get_mut(self.current_row)
            && row.len() < word_length
        {
            row.push(letter);
        }
    }

    /// Remove the last letter of the current row, if any
    pub fn backspace(&mut self) {
        if let Some(row) = self.guesses.get_mut(self.current_row) {
            row.pop();
        }
    }

    /// Submit the current row
    ///
    /// Ignored (the row is left as typed) unless the game is not won, the
    /// row is full, and the word is accepted by the word list.
    pub fn enter(&mut self) {
        if self.won {
            return;
        }
        let Some(row) = self.guesses.get(self.current_row) else {
            return;
        };
        if row.len() != self.word_length() {
            return;
        }
        let word: String = row.iter().collect();
        if !self.word_list.is_allowed(&word) {
            log::debug!("rejected guess {word}: not in word list");
            return;
        }

        let results = evaluate(row, &self.answer);
        let solved = is_solved(&results);
        self.key_results.record(row, &self.answer);
        self.guess_results[self.current_row] = results;
        self.current_row += 1;

        log::debug!("guess {} of {}: {word}", self.current_row, self.num_guesses());

        if solved {
            self.won = true;
            log::info!("day #{} solved in {} guesses", self.day, self.current_row);
        } else if self.current_row == self.num_guesses() {
            self.game_over = true;
            log::info!("day #{} lost", self.day);
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.won || self.game_over
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.game_over {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// All rows, typed letters only (submitted, current, and empty rows)
    #[must_use]
    pub fn guesses(&self) -> &[Vec<char>] {
        &self.guesses
    }

    /// Per-letter results, empty for rows not yet submitted
    #[must_use]
    pub fn guess_results(&self) -> &[Vec<Feedback>] {
        &self.guess_results
    }

    #[must_use]
    pub const fn key_results(&self) -> &KeyResults {
        &self.key_results
    }

    /// The uppercase answer; only meant to be shown once finished
    #[must_use]
    pub fn answer(&self) -> String {
        self.answer.iter().collect()
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn day_index(&self) -> usize {
        self.day
    }

    /// Index of the row being typed; equals `num_guesses` once all are used
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_list.word_length()
    }
}
