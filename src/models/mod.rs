//! Data models for the phone book.

pub mod record;

pub use record::Record;
