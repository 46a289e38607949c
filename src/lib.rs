//! Phonebook Bot - an interactive command-line assistant for managing a
//! personal phone book.
//!
//! Users type free-text commands (`add`, `change`, `phone`, `show all`, ...)
//! to manage contacts with validated phone numbers and optional birthdays.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone number, birthday)
//! - **models**: the contact `Record` aggregate
//! - **book**: the insertion-ordered `AddressBook` with pagination
//! - **commands**: free-text parser and command handlers
//! - **shell**: the read-eval-print loop
//! - **error**: command and configuration error types
//! - **config**: configuration from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use book::AddressBook;
pub use commands::{Command, Dispatcher, ParsedInput, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
