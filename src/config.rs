//! Configuration management for the phonebook bot.
//!
//! Settings come from environment variables (with a `.env` file loaded via
//! `dotenvy` when present). Everything has a default, so the bot runs with no
//! environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of contacts per page for `show all`.
const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for the phonebook bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts per page when listing the address book (default: 5)
    pub page_size: usize,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_PAGE_SIZE`: contacts per `show all` page (default: 5, must be >= 1)
    /// - `PHONEBOOK_LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; dotenvy stays quiet on stdout either way.
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("PHONEBOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("PHONEBOOK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "warn".to_string(),
        }
    }
}
