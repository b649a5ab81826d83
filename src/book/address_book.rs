//! Records keyed by contact name, kept in insertion order.

use super::batches::Batches;
use crate::config::{Config, DEFAULT_BATCH_SIZE};
use crate::error::{BookError, BookResult};
use crate::models::{AddOutcome, Record};
use std::collections::HashMap;

/// An in-memory address book.
///
/// Each contact name maps to exactly one [`Record`]. Iteration follows the
/// order in which records were added.
///
/// # Example
///
/// ```
/// use address_book::{AddOutcome, AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut alice = Record::new("Alice", Some("1990-05-17")).unwrap();
/// alice.add_phone("1234567890").unwrap();
///
/// assert_eq!(book.add_record(alice), AddOutcome::Added);
/// assert!(book.find("Alice").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    batch_size: usize,
}

impl AddressBook {
    /// Create an empty book using the default batch size.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Create an empty book whose [`AddressBook::batches`] uses `config.batch_size`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            ..Self::new()
        }
    }

    /// Insert `record` under its name.
    ///
    /// If the name is taken the stored record is kept and `record` is dropped.
    pub fn add_record(&mut self, record: Record) -> AddOutcome {
        let name = record.name().as_str();

        if self.records.contains_key(name) {
            tracing::debug!(name = %name, "Record already exists in the address book");
            return AddOutcome::AlreadyExists;
        }

        let name = name.to_string();
        tracing::info!(name = %name, "Record has been added to the address book");
        self.order.push(name.clone());
        self.records.insert(name, record);
        AddOutcome::Added
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let record = self.records.get(name);
        match record {
            Some(_) => tracing::debug!(name = %name, "Record found in the address book"),
            None => tracing::debug!(name = %name, "Record not found in the address book"),
        }
        record
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let Some(record) = self.records.remove(name) else {
            tracing::debug!(name = %name, "Record not found in the address book");
            return None;
        };

        self.order.retain(|key| key != name);
        tracing::info!(name = %name, "Record has been deleted from the address book");
        Some(record)
    }

    /// Traverse the book in groups of `batch_size` records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `batch_size` is zero.
    pub fn iterator(&self, batch_size: usize) -> BookResult<Batches<'_>> {
        if batch_size == 0 {
            return Err(BookError::InvalidArgument(
                "batch size must be greater than zero".to_string(),
            ));
        }

        Ok(Batches::new(&self.order, &self.records, batch_size))
    }

    /// Traverse the book using the configured batch size.
    pub fn batches(&self) -> Batches<'_> {
        Batches::new(&self.order, &self.records, self.batch_size)
    }

    /// The configured batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Get the number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(name, None).unwrap()
    }

    fn book_of(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_record(record(name));
        }
        book
    }

    fn batch_names<'a>(batches: impl Iterator<Item = Vec<&'a Record>>) -> Vec<Vec<&'a str>> {
        batches
            .map(|batch| batch.iter().map(|r| r.name().as_str()).collect())
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.add_record(record("Alice")), AddOutcome::Added);
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").map(|r| r.name().as_str()), Some("Alice"));
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn test_add_duplicate_keeps_first() {
        let mut book = AddressBook::new();
        let mut first = record("Alice");
        first.add_phone("1111111111").unwrap();
        let mut second = record("Alice");
        second.add_phone("2222222222").unwrap();

        assert_eq!(book.add_record(first.clone()), AddOutcome::Added);
        assert_eq!(book.add_record(second), AddOutcome::AlreadyExists);
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice"), Some(&first));
    }

    #[test]
    fn test_find_mut() {
        let mut book = book_of(&["Alice"]);
        book.find_mut("Alice")
            .unwrap()
            .add_phone("1234567890")
            .unwrap();
        assert!(book
            .find("Alice")
            .unwrap()
            .find_phone("1234567890")
            .is_some());
        assert!(book.find_mut("Bob").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = book_of(&["Alice", "Bob", "Carol"]);
        let removed = book.delete("Bob").unwrap();
        assert_eq!(removed.name().as_str(), "Bob");
        assert!(book.find("Bob").is_none());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Carol"]);

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_re_adding_deleted_name_goes_last() {
        let mut book = book_of(&["Alice", "Bob"]);
        book.delete("Alice");
        book.add_record(record("Alice"));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_iterator_batches_in_insertion_order() {
        let book = book_of(&["Alice", "Bob", "Carol", "Dan", "Eve"]);
        let batches = book.iterator(2).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(
            batch_names(batches),
            vec![vec!["Alice", "Bob"], vec!["Carol", "Dan"], vec!["Eve"]]
        );
    }

    #[test]
    fn test_iterator_exact_and_oversized_batches() {
        let book = book_of(&["Alice", "Bob", "Carol", "Dan"]);
        assert_eq!(
            batch_names(book.iterator(2).unwrap()),
            vec![vec!["Alice", "Bob"], vec!["Carol", "Dan"]]
        );
        assert_eq!(
            batch_names(book.iterator(10).unwrap()),
            vec![vec!["Alice", "Bob", "Carol", "Dan"]]
        );
    }

    #[test]
    fn test_iterator_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.iterator(3).unwrap().count(), 0);
    }

    #[test]
    fn test_iterator_rejects_zero_batch_size() {
        let book = book_of(&["Alice"]);
        assert!(matches!(
            book.iterator(0),
            Err(BookError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_iterator_is_single_pass_and_restartable() {
        let mut book = book_of(&["Alice", "Bob", "Carol"]);

        let mut batches = book.iterator(2).unwrap();
        assert_eq!(batches.next().map(|b| b.len()), Some(2));
        assert_eq!(batches.next().map(|b| b.len()), Some(1));
        assert!(batches.next().is_none());
        assert!(batches.next().is_none());

        book.add_record(record("Dan"));
        assert_eq!(
            batch_names(book.iterator(2).unwrap()),
            vec![vec!["Alice", "Bob"], vec!["Carol", "Dan"]]
        );
    }

    #[test]
    fn test_batches_use_configured_size() {
        let config = Config {
            batch_size: 2,
            ..Config::default()
        };
        let mut book = AddressBook::from_config(&config);
        for name in ["Alice", "Bob", "Carol"] {
            book.add_record(record(name));
        }

        assert_eq!(book.batch_size(), 2);
        assert_eq!(
            batch_names(book.batches()),
            vec![vec!["Alice", "Bob"], vec!["Carol"]]
        );
        assert_eq!(AddressBook::new().batch_size(), DEFAULT_BATCH_SIZE);
    }
}
