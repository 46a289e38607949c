//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted phone format: `(XXX)AAA-BB-CC`.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\)\d{3}-\d{2}-\d{2}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are validated at construction time against the strict
/// `(XXX)AAA-BB-CC` format: three digits in parentheses, then three digits,
/// two digits and two digits separated by hyphens. An accepted string is
/// stored verbatim and round-trips exactly.
///
/// # Example
///
/// ```
/// use phonebook_bot::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123)456-78-90").unwrap();
/// assert_eq!(phone.as_str(), "(123)456-78-90");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the string does not match
    /// `(XXX)AAA-BB-CC` exactly.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("(123)456-78-90").unwrap();
        assert_eq!(phone.as_str(), "(123)456-78-90");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
        assert!(PhoneNumber::new("(123)456-78-90").is_ok());
        assert!(PhoneNumber::new("(000)000-00-00").is_ok());
        // Missing parentheses
        assert!(PhoneNumber::new("123456-78-90").is_err());
        // Wrong grouping
        assert!(PhoneNumber::new("(123)45-678-90").is_err());
        // Trailing garbage
        assert!(PhoneNumber::new("(123)456-78-90x").is_err());
        // Leading whitespace
        assert!(PhoneNumber::new(" (123)456-78-90").is_err());
        // Too many digits in the area code
        assert!(PhoneNumber::new("(1234)456-78-90").is_err());
    }

    #[test]
    fn test_phone_round_trips_exact_string() {
        let raw = "(987)654-32-10";
        let phone = PhoneNumber::new(raw).unwrap();
        assert_eq!(phone.clone().into_inner(), raw);
        assert_eq!(format!("{}", phone), raw);
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("(123)456-78-90").unwrap();
        assert_eq!(phone.digits_only(), "1234567890");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("(123)456-78-90").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"(123)456-78-90\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
