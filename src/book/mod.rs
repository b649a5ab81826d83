//! The address book: records keyed by contact name.
//!
//! - **address_book**: the keyed collection and its add/find/delete operations
//! - **batches**: fixed-size batched traversal over the collection

pub mod address_book;
pub mod batches;

pub use address_book::AddressBook;
pub use batches::Batches;
