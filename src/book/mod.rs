//! In-memory address book keyed by contact name.
//!
//! The book preserves insertion order so listings and pagination are stable
//! across calls. It lives for the duration of the process; there is no
//! persistence layer.

use crate::models::Record;
use indexmap::IndexMap;

/// Insertion-ordered mapping from contact name to [`Record`].
///
/// The key is always the record's own name; `add_record` derives it, so the
/// two can never disagree. Re-adding an existing name overwrites the record
/// in place without changing its position in the listing order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. Overwrites any existing record
    /// with the same name (upsert; the "append instead of overwrite" policy
    /// belongs to the command layer).
    pub fn add_record(&mut self, record: Record) {
        self.entries
            .insert(record.name().as_str().to_string(), record);
    }

    /// Whether a contact with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up a contact by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Look up a contact by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(name, rec)| (name.as_str(), rec))
    }

    /// Iterate over the book in pages of up to `page_size` contacts, in
    /// insertion order.
    ///
    /// The iterator is lazy and finite; each call starts from the first
    /// contact. A `page_size` of 0 is treated as 1 so the iterator still
    /// terminates.
    pub fn paginate(&self, page_size: usize) -> Pages<'_> {
        Pages {
            entries: self.entries.iter(),
            page_size: page_size.max(1),
        }
    }
}

/// Iterator over fixed-size pages of an [`AddressBook`].
///
/// Yields non-empty `Vec`s of `(name, record)` pairs; every page but the
/// last holds exactly `page_size` entries.
pub struct Pages<'a> {
    entries: indexmap::map::Iter<'a, String, Record>,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<(&'a str, &'a Record)>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<_> = self
            .entries
            .by_ref()
            .take(self.page_size)
            .map(|(name, rec)| (name.as_str(), rec))
            .collect();

        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;

    fn record(name: &str, phone: &str) -> Record {
        let mut rec = Record::new(ContactName::new(name).unwrap());
        rec.add_phone(phone).unwrap();
        rec
    }

    fn numbered_book(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add_record(record(&format!("Contact{i}"), "(123)456-78-90"));
        }
        book
    }

    #[test]
    fn test_add_and_get() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "(123)456-78-90"));

        assert!(book.contains("Alice"));
        assert!(!book.contains("Bob"));
        assert_eq!(
            book.get("Alice").unwrap().phones()[0].as_str(),
            "(123)456-78-90"
        );
        assert!(book.get("Bob").is_none());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "(111)111-11-11"));
        book.add_record(record("Bob", "(222)222-22-22"));
        book.add_record(record("Alice", "(333)333-33-33"));

        assert_eq!(book.len(), 2);
        let names: Vec<_> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(
            book.get("Alice").unwrap().phones()[0].as_str(),
            "(333)333-33-33"
        );
    }

    #[test]
    fn test_paginate_seven_contacts_page_size_five() {
        let book = numbered_book(7);

        let pages: Vec<_> = book.paginate(5).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 5);
        assert_eq!(pages[1].len(), 2);

        // Insertion order, every contact exactly once.
        let names: Vec<_> = pages
            .iter()
            .flatten()
            .map(|(name, _)| name.to_string())
            .collect();
        let expected: Vec<_> = (0..7).map(|i| format!("Contact{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let book = numbered_book(6);
        let sizes: Vec<_> = book.paginate(3).map(|page| page.len()).collect();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn test_paginate_empty_book_yields_no_pages() {
        let book = AddressBook::new();
        assert_eq!(book.paginate(5).count(), 0);
    }

    #[test]
    fn test_paginate_fresh_call_restarts() {
        let book = numbered_book(4);

        let first: Vec<_> = book.paginate(3).collect();
        let second: Vec<_> = book.paginate(3).collect();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0][0].0, second[0][0].0);
    }

    #[test]
    fn test_paginate_zero_page_size_clamped() {
        let book = numbered_book(3);
        let sizes: Vec<_> = book.paginate(0).map(|page| page.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1]);
    }
}
