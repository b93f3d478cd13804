//! Log output setup
//!
//! The TUI owns the terminal, so logs only go to a file and only when one is
//! requested. Without a file no logger is installed and the `log` macros are
//! no-ops. The level comes from `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Install a logger writing to `path`
///
/// # Errors
///
/// Fails if the file cannot be created or a logger is already installed.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    log::debug!("logging to {}", path.display());
    Ok(())
}
