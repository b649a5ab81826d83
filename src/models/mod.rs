//! Data models for address book entries.
//!
//! This module contains the contact record and the outcome types its
//! operations report when nothing went wrong but nothing changed either.

pub mod outcome;
pub mod record;

pub use outcome::{AddOutcome, EditOutcome};
pub use record::Record;
