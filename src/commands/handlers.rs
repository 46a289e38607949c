//! Command handlers and the dispatch boundary.
//!
//! The [`Dispatcher`] owns the address book and executes parsed commands.
//! Every handler returns a typed `CommandResult<String>`; `execute` is the
//! single place where errors become user-facing reply text, so no failure
//! ever escapes to kill the read loop.

use crate::book::AddressBook;
use crate::commands::parser::{self, Command, ParsedInput};
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Greeting printed at startup and in reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Farewell printed when the session ends.
pub const GOODBYE: &str = "Good bye!";

/// Reply to input that matches no command keyword.
pub const UNKNOWN_COMMAND: &str = "Sorry, unknown command, try again. Type \"h\" for help.";

/// Reply to `help` / `h`.
pub const HELP_TEXT: &str =
    "Known commands: hello, help, add, change, phone, show all, delete, good bye, close, exit.";

const ADD_USAGE: &str = "add <name> <phone> [<birthday DD-MM-YYYY>]";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const DELETE_USAGE: &str = "delete <name> <phone>";
const PHONE_USAGE: &str = "phone <name>";

/// Outcome of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and read the next line.
    Message(String),
    /// The user asked to quit; print the farewell and stop.
    Exit,
}

/// Executes commands against an owned [`AddressBook`].
pub struct Dispatcher {
    book: AddressBook,
    page_size: usize,
}

impl Dispatcher {
    /// Create a dispatcher over `book`, listing `page_size` contacts per
    /// page in `show all`.
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self { book, page_size }
    }

    /// Read-only view of the address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line.
    ///
    /// This is the error boundary: every handler failure is converted into
    /// its display string and returned as a normal reply.
    pub fn execute(&mut self, line: &str) -> Reply {
        let Some(ParsedInput { command, args }) = parser::parse(line) else {
            return Reply::Message(UNKNOWN_COMMAND.to_string());
        };

        debug!(?command, args = args.len(), "dispatching command");

        if command == Command::Exit {
            return Reply::Exit;
        }

        let result = match command {
            Command::Hello => Ok(GREETING.to_string()),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Add => self.add(&args),
            Command::Change => self.change(&args),
            Command::DeletePhone => self.delete_phone(&args),
            Command::Phone => self.lookup(&args),
            Command::ShowAll => Ok(self.show_all(Local::now().date_naive())),
            Command::Exit => unreachable!("handled above"),
        };

        Reply::Message(result.unwrap_or_else(|err| err.to_string()))
    }

    /// `add <name> <phone> [<birthday>]`: create a record for a new name, or
    /// append the phone to an existing one.
    fn add(&mut self, args: &[String]) -> CommandResult<String> {
        let name = required_arg(args, 0, ADD_USAGE)?;
        let phone = args.get(1).map(String::as_str);
        let birthday = args.get(2).map(String::as_str);

        if let Some(record) = self.book.get_mut(name) {
            // Known contact: appending needs a number to append.
            let phone = phone.ok_or(CommandError::MissingArgs { usage: ADD_USAGE })?;
            record.add_phone(phone)?;
            let note = birthday.and_then(|raw| set_birthday_lenient(record, raw));
            return Ok(format!(
                "New number added to {}{}",
                name,
                note.unwrap_or_default()
            ));
        }

        let mut record = Record::new(ContactName::new(name)?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        let note = birthday.and_then(|raw| set_birthday_lenient(&mut record, raw));
        self.book.add_record(record);

        Ok(format!(
            "Contact added successfully{}",
            note.unwrap_or_default()
        ))
    }

    /// `change <name> <old_phone> <new_phone>`: replace matching numbers.
    /// Zero matches still reports success (documented quirk).
    fn change(&mut self, args: &[String]) -> CommandResult<String> {
        let name = required_arg(args, 0, CHANGE_USAGE)?;
        let old = required_arg(args, 1, CHANGE_USAGE)?;
        let new = required_arg(args, 2, CHANGE_USAGE)?;

        let record = self
            .book
            .get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.change_phone(old, new)?;

        Ok("Contact changed successfully".to_string())
    }

    /// `delete <name> <phone>`: remove matching numbers. Zero matches still
    /// reports success.
    fn delete_phone(&mut self, args: &[String]) -> CommandResult<String> {
        let name = required_arg(args, 0, DELETE_USAGE)?;
        let phone = required_arg(args, 1, DELETE_USAGE)?;

        let record = self
            .book
            .get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.delete_phone(phone);

        Ok("Phone number deleted successfully".to_string())
    }

    /// `phone <name>`: one formatted line for the named contact.
    fn lookup(&self, args: &[String]) -> CommandResult<String> {
        let name = required_arg(args, 0, PHONE_USAGE)?;

        let record = self
            .book
            .get(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        Ok(format_entry(name, record, Local::now().date_naive()))
    }

    /// `show all`: every contact, paginated, in insertion order.
    fn show_all(&self, today: NaiveDate) -> String {
        if self.book.is_empty() {
            return "Contact list is empty".to_string();
        }

        let pages: Vec<String> = self
            .book
            .paginate(self.page_size)
            .map(|page| {
                page.iter()
                    .map(|(name, record)| format_entry(name, record, today))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        // Blank line between pages.
        pages.join("\n\n")
    }
}

/// Format one contact as `Name: X | Numbers: ... [| Birthday: ... | countdown]`.
fn format_entry(name: &str, record: &Record, today: NaiveDate) -> String {
    let mut line = format!("Name: {} | Numbers: {}", name, record.phone_list());

    if let Some(birthday) = record.birthday() {
        line.push_str(&format!(" | Birthday: {}", birthday));
        match birthday.days_until(today) {
            0 => line.push_str(" | Birthday today!"),
            days => line.push_str(&format!(" | Days to birthday: {}", days)),
        }
    }

    line
}

/// Lenient birthday policy for `add`: a malformed date is logged and noted
/// in the reply, but never aborts the command. Returns the reply note on
/// failure, `None` on success.
fn set_birthday_lenient(record: &mut Record, raw: &str) -> Option<String> {
    match record.set_birthday(raw) {
        Ok(()) => None,
        Err(err) => {
            warn!(%err, "ignoring malformed birthday");
            Some(format!(" (birthday ignored: {})", err))
        }
    }
}

/// Fetch a positional argument or fail with the command's usage line.
fn required_arg<'a>(args: &'a [String], index: usize, usage: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgs { usage })
}
