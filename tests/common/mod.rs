//! Shared fixtures for integration tests.

use address_book::{AddressBook, Record};

/// Create a record with the given phones and no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name, None).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// Create a book holding one phoneless record per name, in order.
#[allow(dead_code)]
pub fn sample_book(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for name in names {
        book.add_record(sample_record(name, &[]));
    }
    book
}

/// Phone values of a record, in stored order.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<String> {
    record
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}
