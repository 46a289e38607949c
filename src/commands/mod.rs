//! Command parsing and execution.

pub mod handlers;
pub mod parser;

pub use handlers::{Dispatcher, Reply};
pub use parser::{parse, Command, ParsedInput};
