//! Address Book - an in-memory contact directory with validated fields.
//!
//! Contacts are stored by name. Each contact carries an ordered list of
//! ten-digit phone numbers and an optional birthday; every field is validated
//! when it is set.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record and operation outcomes
//! - **book**: The address book and its batched iterator
//! - **error**: Error types for records, the book and configuration
//! - **config**: Configuration management from environment variables
//! - **observability**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddOutcome, AddressBook, EditOutcome, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut alice = Record::new("Alice", Some("1990-05-17")).unwrap();
//! assert_eq!(alice.add_phone("1234567890").unwrap(), AddOutcome::Added);
//! assert_eq!(alice.add_phone("1234567890").unwrap(), AddOutcome::AlreadyExists);
//! assert_eq!(
//!     alice.edit_phone("1234567890", "0987654321").unwrap(),
//!     EditOutcome::Updated
//! );
//! book.add_record(alice);
//!
//! for batch in book.iterator(2).unwrap() {
//!     for record in batch {
//!         println!("{}", record);
//!     }
//! }
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use book::{AddressBook, Batches};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddOutcome, EditOutcome, Record};
pub use observability::init_tracing;
