//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin/stdout
//! and saves the book when the loop ends.

use anyhow::{Context, Result};
use contact_book::repositories::JsonFileRepository;
use contact_book::{cli, Config};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repository = JsonFileRepository::new(&config.book_path);
    info!(path = %repository.path().display(), "Configuration loaded");

    cli::run_session(&repository, io::stdin().lock(), io::stdout().lock())
        .with_context(|| format!("address book {}", repository.path().display()))?;

    info!("Contact book shutdown complete");
    Ok(())
}
