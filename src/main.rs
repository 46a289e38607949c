//! Phonebook Bot - Main entry point
//!
//! Starts the interactive shell on stdin/stdout. Logging goes to stderr so
//! the conversation on stdout stays clean.

use anyhow::Result;
use phonebook_bot::{AddressBook, Config, Dispatcher};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can serve as the fallback
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(page_size = config.page_size, "starting phonebook bot");

    let mut dispatcher = Dispatcher::new(AddressBook::new(), config.page_size);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = phonebook_bot::shell::run(stdin.lock(), stdout.lock(), &mut dispatcher) {
        error!("shell terminated with I/O error: {e}");
        return Err(e.into());
    }

    info!("session ended");
    Ok(())
}
