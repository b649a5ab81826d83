//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from:
//! names, phone numbers and birthdays. Each value object checks its format
//! at construction and on every reassignment, so invalid data can never be
//! stored in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
