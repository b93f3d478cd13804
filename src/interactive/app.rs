//! Application state: the live game plus day navigation

use super::event::InputEvent;
use crate::game::Game;
use crate::wordlists::WordList;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Owns exactly one [`Game`]. Changing day replaces it with a fresh game
/// for the new date.
pub struct App<'a, R: Rng> {
    word_list: &'a WordList,
    num_guesses: usize,
    game: Game<'a>,
    rng: R,
    should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    /// # Panics
    /// Panics if `num_guesses` is 0.
    #[must_use]
    pub fn new(word_list: &'a WordList, date: NaiveDate, num_guesses: usize, rng: R) -> Self {
        Self {
            word_list,
            num_guesses,
            game: Game::new(word_list, date, num_guesses),
            rng,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game<'a> {
        &self.game
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one event; the caller redraws afterwards
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Letter(_) | InputEvent::Enter | InputEvent::Backspace => {
                if let Some(input) = event.game_input() {
                    self.game.apply(input);
                }
            }
            InputEvent::NextDay => {
                if let Some(date) = self.game.date().checked_add_days(Days::new(1)) {
                    self.go_to(date);
                }
            }
            InputEvent::PreviousDay => {
                if let Some(date) = self.game.date().checked_sub_days(Days::new(1)) {
                    self.go_to(date);
                }
            }
            InputEvent::RandomDay => {
                let date = self.word_list.random_date(&mut self.rng);
                self.go_to(date);
            }
            InputEvent::Quit => self.should_quit = true,
            InputEvent::Resize => {}
        }
    }

    /// Start a new game for `date`
    pub fn go_to(&mut self, date: NaiveDate) {
        log::info!("switching to {date}");
        self.game = Game::new(self.word_list, date, self.num_guesses);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app.game()))?;

        let raw = event::read()?;
        let Some(input) = InputEvent::from_terminal(&raw, app.game().is_finished()) else {
            continue;
        };
        app.handle_event(input);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
