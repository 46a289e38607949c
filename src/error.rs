//! Error types for the phonebook bot.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain-level validation errors live in [`crate::domain::errors`];
//! everything here sits at the command and configuration layers.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every variant is converted into a user-facing reply string at the single
/// dispatch boundary; none of them ever terminates the read loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A phone or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("No contact \"{0}\"")]
    ContactNotFound(String),

    /// Too few positional arguments for the command
    #[error("Sorry, not enough params for command. Usage: {usage}")]
    MissingArgs { usage: &'static str },

    /// A birthday-dependent operation was invoked on a contact without one
    #[error("Contact \"{0}\" has no birthday set")]
    BirthdayUnset(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
