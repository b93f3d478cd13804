//! TUI rendering with ratatui
//!
//! Draws a read-only view of the game: keyboard, guess grid, day line and,
//! once the game is finished, the result and the navigation menu.

use crate::core::{Feedback, KEYBOARD_ROWS, KeyResults};
use crate::game::{Game, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Tile colours per feedback
#[must_use]
pub fn feedback_style(feedback: Feedback) -> Style {
    let (bg, fg) = match feedback {
        Feedback::Unknown => (Color::White, Color::Black),
        Feedback::NotIncluded => (Color::DarkGray, Color::White),
        Feedback::WrongPos => (Color::Yellow, Color::Black),
        Feedback::Correct => (Color::Green, Color::White),
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, game: &Game) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Keyboard + guesses
            Constraint::Length(8), // Day, result, menu
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(20)])
        .split(chunks[1]);

    render_keyboard(f, game.key_results(), main_chunks[0]);
    render_guesses(f, game, main_chunks[1]);
    render_status(f, game, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE DAILY")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(letter: char, feedback: Feedback) -> Span<'static> {
    Span::styled(format!(" {letter} "), feedback_style(feedback))
}

fn keyboard_lines(keys: &KeyResults) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
    for (letters, indent) in KEYBOARD_ROWS {
        let mut spans = vec![Span::raw(" ".repeat(usize::from(indent) * 2))];
        for letter in letters.chars() {
            spans.push(tile(letter, keys.get(letter)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

fn render_keyboard(f: &mut Frame, keys: &KeyResults, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(keys)).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn guess_lines(game: &Game) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(game.num_guesses() * 2);
    for (row, results) in game.guesses().iter().zip(game.guess_results()) {
        let mut spans = Vec::with_capacity(game.word_length() * 2);
        for position in 0..game.word_length() {
            let letter = row.get(position).copied().unwrap_or(' ');
            let feedback = results.get(position).copied().unwrap_or_default();
            spans.push(tile(letter, feedback));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

fn render_guesses(f: &mut Frame, game: &Game, area: Rect) {
    let guesses = Paragraph::new(guess_lines(game))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(guesses, area);
}

fn status_lines(game: &Game) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(format!(
        "Day #{}: {}",
        game.day_index(),
        game.date().format("%Y/%m/%d")
    ))];

    match game.status() {
        GameStatus::InProgress => {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Type a word and press Enter | Backspace to delete | Esc to quit",
                Style::default().fg(Color::DarkGray),
            ));
            return lines;
        }
        GameStatus::Won => {
            lines.push(Line::default());
            lines.push(Line::styled(
                "You won!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        GameStatus::Lost => {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Game over - Word was '{}'", game.answer()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from("Press n for the next day"));
    lines.push(Line::from("Press p for the previous day"));
    lines.push(Line::from("Press r for a random day"));
    lines
}

/// Quit keys shown in the status title; `q` types a letter until the game ends
fn quit_hint(game: &Game) -> &'static str {
    if game.is_finished() {
        " q / Esc: Quit "
    } else {
        " Esc: Quit "
    }
}

fn render_status(f: &mut Frame, game: &Game, area: Rect) {
    let status = Paragraph::new(status_lines(game)).block(
        Block::default()
            .borders(Borders::TOP)
            .title(quit_hint(game)),
    );
    f.render_widget(status, area);
}
