//! Input events and their mapping from terminal key presses

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Uppercase letter `A`-`Z`
    Letter(char),
    Enter,
    Backspace,
    NextDay,
    PreviousDay,
    RandomDay,
    Quit,
    /// Terminal size changed; redraw only
    Resize,
}

impl InputEvent {
    /// The engine input this event carries, if any
    #[must_use]
    pub const fn game_input(self) -> Option<GameInput> {
        match self {
            Self::Letter(letter) => Some(GameInput::Letter(letter)),
            Self::Enter => Some(GameInput::Enter),
            Self::Backspace => Some(GameInput::Backspace),
            Self::NextDay | Self::PreviousDay | Self::RandomDay | Self::Quit | Self::Resize => None,
        }
    }

    /// Translate a terminal event
    ///
    /// Only key presses are considered (repeat/release events are dropped,
    /// which also avoids double input on Windows).
    #[must_use]
    pub fn from_terminal(event: &Event, finished: bool) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(key, finished),
            Event::Resize(..) => Some(Self::Resize),
            _ => None,
        }
    }

    /// Translate a key press
    ///
    /// Esc and Ctrl-C always quit. Once the game is finished the letter keys
    /// become the menu: `n`ext day, `p`revious day, `r`andom day, `q`uit.
    #[must_use]
    pub fn from_key(key: &KeyEvent, finished: bool) -> Option<Self> {
        match key.code {
            KeyCode::Esc => return Some(Self::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Self::Quit);
            }
            _ => {}
        }

        if finished {
            return match key.code {
                KeyCode::Char('n') => Some(Self::NextDay),
                KeyCode::Char('p') => Some(Self::PreviousDay),
                KeyCode::Char('r') => Some(Self::RandomDay),
                KeyCode::Char('q') => Some(Self::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_uppercase())),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            _ => None,
        }
    }
}
