//! Interactive TUI interface

mod app;
mod event;
pub mod rendering;

pub use app::{App, run_tui};
pub use event::InputEvent;
