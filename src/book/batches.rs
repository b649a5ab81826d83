//! Batched traversal of an address book.

use crate::models::Record;
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// Iterator over consecutive groups of records.
///
/// Created by [`AddressBook::iterator`](super::AddressBook::iterator). Yields
/// groups of the requested size in insertion order; the last group may be
/// shorter. The book is borrowed for the whole traversal, so it cannot change
/// underneath the iterator.
///
/// A traversal cannot be duplicated part-way through; ask the book for a new
/// one instead.
///
/// ```compile_fail
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Alice", None).unwrap());
///
/// let mut batches = book.iterator(1).unwrap();
/// batches.next();
/// let _replay = batches.clone();
/// ```
#[derive(Debug)]
pub struct Batches<'a> {
    chunks: Chunks<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Batches<'a> {
    pub(crate) fn new(
        order: &'a [String],
        records: &'a HashMap<String, Record>,
        batch_size: usize,
    ) -> Self {
        Self {
            chunks: order.chunks(batch_size),
            records,
        }
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        self.chunks
            .next()
            .map(|names| names.iter().filter_map(|name| records.get(name)).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
