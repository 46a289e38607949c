//! Record model representing one contact in the phone book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and serves as the address book key.
/// Phone numbers form an ordered list; duplicates are permitted. All raw
/// input passes through the domain value objects, so a `Record` never holds
/// a malformed phone or birthday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` on a malformed number; the
    /// existing phone list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone equal to `old` with the validated `new` number.
    ///
    /// Returns how many entries were replaced. Zero matches is a no-op, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is malformed; no
    /// entry is replaced in that case.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// Remove every phone equal to `raw`, returning how many were removed.
    ///
    /// Zero matches is a no-op.
    pub fn delete_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Parse `raw` as `DD-MM-YYYY` and set the birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on a malformed date; any
    /// previously set birthday is kept.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days from `today` to the next occurrence of the birthday, or `None`
    /// when no birthday is set. 0 means the birthday is today.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    /// Phone numbers joined for display, e.g. `"(123)456-78-90, (111)222-33-44"`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
