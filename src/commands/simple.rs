//! Simple line-based mode
//!
//! Plays the same game as the TUI without taking over the terminal: one
//! guess per line, coloured feedback printed after each accepted guess.

use crate::core::KEYBOARD_ROWS;
use crate::game::{Game, GameStatus};
use crate::interactive::{App, InputEvent};
use crate::output::{colored_row, share_text};
use crate::output::formatters::colored_tile;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(app: App<'_, R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(app, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Drive `app` from `input` lines, writing the transcript to `out`
///
/// While playing, each line is a guess (`:q` quits). Once the game is over
/// the menu keys `n`, `p`, `r` and `q` are read instead.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn play_lines<R: Rng, I: BufRead, W: Write>(
    mut app: App<'_, R>,
    input: I,
    out: &mut W,
) -> io::Result<()> {
    print_day(out, app.game())?;
    prompt(out, app.game())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if app.game().is_finished() {
            let event = match line {
                "n" => InputEvent::NextDay,
                "p" => InputEvent::PreviousDay,
                "r" => InputEvent::RandomDay,
                "q" => InputEvent::Quit,
                _ => {
                    prompt(out, app.game())?;
                    continue;
                }
            };
            app.handle_event(event);
            if app.should_quit() {
                break;
            }
            print_day(out, app.game())?;
        } else if line == ":q" {
            break;
        } else if !line.is_empty() {
            submit_line(&mut app, line, out)?;
        }

        prompt(out, app.game())?;
    }

    writeln!(out, "Thanks for playing!")
}

fn submit_line<R: Rng, W: Write>(app: &mut App<'_, R>, line: &str, out: &mut W) -> io::Result<()> {
    let word_length = app.game().word_length();
    let letters: Vec<char> = line.chars().map(|c| c.to_ascii_uppercase()).collect();

    if letters.len() != word_length || !letters.iter().all(char::is_ascii_uppercase) {
        return writeln!(out, "Guesses must be {word_length} letters");
    }

    let row = app.game().current_row();
    for &letter in &letters {
        app.handle_event(InputEvent::Letter(letter));
    }
    app.handle_event(InputEvent::Enter);

    if app.game().current_row() == row {
        // Rejected: clear the row so the next line starts fresh
        for _ in &letters {
            app.handle_event(InputEvent::Backspace);
        }
        return writeln!(out, "Not in word list: {line}");
    }

    let game = app.game();
    writeln!(out, "{}", colored_row(&game.guesses()[row], &game.guess_results()[row]))?;
    print_keyboard(out, game)?;

    match game.status() {
        GameStatus::InProgress => Ok(()),
        GameStatus::Won => print_result(out, game, "You won!"),
        GameStatus::Lost => {
            let message = format!("Game over - Word was '{}'", game.answer());
            print_result(out, game, &message)
        }
    }
}

fn print_day<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(
        out,
        "\nDay #{}: {} ({} guesses, {} letters)",
        game.day_index(),
        game.date().format("%Y/%m/%d"),
        game.num_guesses(),
        game.word_length()
    )
}

fn print_keyboard<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    for (letters, indent) in KEYBOARD_ROWS {
        let keys: Vec<String> = letters
            .chars()
            .map(|letter| colored_tile(letter, game.key_results().get(letter)).to_string())
            .collect();
        writeln!(out, "{}{}", " ".repeat(usize::from(indent) * 2), keys.join(" "))?;
    }
    Ok(())
}

fn print_result<W: Write>(out: &mut W, game: &Game, message: &str) -> io::Result<()> {
    writeln!(out, "\n{message}\n")?;
    writeln!(out, "{}\n", share_text(game))?;
    writeln!(out, "n: next day | p: previous day | r: random day | q: quit")
}

fn prompt<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    if game.is_finished() {
        write!(out, "> ")?;
    } else {
        write!(out, "Guess {}/{}: ", game.current_row() + 1, game.num_guesses())?;
    }
    out.flush()
}
