//! Wordle Daily - CLI
//!
//! Daily word puzzle with a TUI (default) and a line-based mode.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::run_simple,
    config::{Config, DateChoice},
    game::DEFAULT_GUESSES,
    interactive::{App, run_tui},
    logging::init_file_logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the word of the day in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play the puzzle for this day (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true, conflicts_with = "random")]
    date: Option<NaiveDate>,

    /// Play a random day from the answer list
    #[arg(short, long, global = true)]
    random: bool,

    /// Number of guesses per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_GUESSES as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    guesses: u16,

    /// Answers file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses, one word per line
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    /// Day of the first answer (YYYY-MM-DD)
    #[arg(long, global = true)]
    start_date: Option<NaiveDate>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,
}

impl Cli {
    fn config(&self) -> Config {
        let date = match (self.date, self.random) {
            (Some(date), _) => DateChoice::Fixed(date),
            (None, true) => DateChoice::Random,
            (None, false) => DateChoice::Today,
        };

        Config {
            date,
            num_guesses: usize::from(self.guesses),
            answers: self.answers.clone(),
            allowed: self.allowed.clone(),
            start_date: self.start_date,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    if let Some(path) = &config.log_file {
        init_file_logging(path)?;
    }

    let word_list = config.load_word_list()?;
    let mut rng = rand::rng();
    let today = Local::now().date_naive();
    let date = config.resolve_date(&word_list, today, &mut rng);

    let app = App::new(&word_list, date, config.num_guesses, rng);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(app),
        Commands::Simple => run_simple(app),
    }
}
