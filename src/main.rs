//! Contact book - main entry point
//!
//! Loads the contact file, runs the interactive session, and writes the
//! book back when the session ends.

use anyhow::Result;
use contact_book::{repl, storage, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can act as the filter fallback
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = storage::load(&config.book_file)?;
    info!(
        "loaded {} contacts from {}",
        book.len(),
        config.book_file.display()
    );

    repl::run(&mut book, &config)?;

    storage::save(&config.book_file, &book)?;
    Ok(())
}
