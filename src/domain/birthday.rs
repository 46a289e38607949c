//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A contact's birthday, parsed from the `DD-MM-YYYY` format.
///
/// Wraps a [`chrono::NaiveDate`] so countdown arithmetic is plain calendar
/// math rather than string handling.
///
/// # Example
///
/// ```
/// use phonebook_bot::domain::Birthday;
///
/// let birthday = Birthday::new("15-04-1990").unwrap();
/// assert_eq!(birthday.to_string(), "15-04-1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a
    /// valid calendar date in that format.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday's
    /// month/day, counting `today` itself as 0.
    ///
    /// If this year's occurrence has already passed, the countdown targets
    /// next year's; the result is never negative. A Feb-29 birthday rolls
    /// forward to the next year in which the date exists.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// The first calendar date with this birthday's month/day on or after
    /// `today`.
    fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        let mut year = today.year();
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if date >= today {
                    return date;
                }
            }
            year += 1;
        }
    }
}

// Serde support - serialize as the DD-MM-YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
