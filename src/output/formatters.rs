//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::{Game, GameStatus};
use colored::{ColoredString, Colorize};

/// Format a row of feedback as emoji tiles
#[must_use]
pub fn emoji_row(results: &[Feedback]) -> String {
    results.iter().map(|feedback| feedback.to_emoji()).collect()
}

/// A single letter tile coloured by its feedback
#[must_use]
pub fn colored_tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Feedback::Unknown => text.black().on_white(),
        Feedback::NotIncluded => text.white().on_bright_black(),
        Feedback::WrongPos => text.black().on_yellow(),
        Feedback::Correct => text.white().on_green(),
    }
    .bold()
}

/// A guess row as coloured tiles separated by single spaces
#[must_use]
pub fn colored_row(letters: &[char], results: &[Feedback]) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            colored_tile(letter, results.get(i).copied().unwrap_or_default()).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spoiler-free summary of a game: header line plus one emoji row per guess
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::game::Game;
/// use wordle_daily::output::formatters::share_text;
/// use wordle_daily::wordlists::WordList;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let list = WordList::from_lines(["crane"], Some(["slate"]), start).unwrap();
/// let mut game = Game::new(&list, start, 6);
/// for word in ["SLATE", "CRANE"] {
///     word.chars().for_each(|c| game.keypress(c));
///     game.enter();
/// }
///
/// assert_eq!(share_text(&game), "Wordle Daily #0 2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(game: &Game) -> String {
    let score = match game.status() {
        GameStatus::Won => game.current_row().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut lines = vec![format!(
        "Wordle Daily #{} {score}/{}",
        game.day_index(),
        game.num_guesses()
    )];
    lines.extend(
        game.guess_results()
            .iter()
            .take(game.current_row())
            .map(|results| emoji_row(results)),
    );
    lines.join("\n")
}
