//! Record model representing one contact in the address book.

use super::outcome::{AddOutcome, EditOutcome};
use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// A contact: a fixed name, an ordered list of unique phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Birthday,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or the birthday is
    /// not a real `YYYY-MM-DD` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name).map_err(|err| {
            tracing::warn!("Contact name cannot be empty");
            err
        })?;
        let birthday = Birthday::new(birthday).map_err(|err| {
            tracing::warn!(name = %name, birthday = ?birthday, "Invalid birthday format");
            err
        })?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday (possibly empty).
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Replace or clear the birthday. Invalid input keeps the current value.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        match birthday {
            Some(raw) => self
                .birthday
                .set_value(raw)
                .map_err(|err| self.reject_birthday(raw, err))?,
            None => self.birthday.clear(),
        }
        Ok(())
    }

    /// Append a phone unless an equal one is already stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a malformed number; the
    /// record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<AddOutcome, ValidationError> {
        let phone = Phone::new(phone).map_err(|err| self.reject_phone(phone, err))?;

        if self.phones.contains(&phone) {
            tracing::debug!(name = %self.name, phone = %phone, "Phone number already exists for this contact");
            return Ok(AddOutcome::AlreadyExists);
        }

        tracing::info!(name = %self.name, phone = %phone, "Phone number has been added to the contact");
        self.phones.push(phone);
        Ok(AddOutcome::Added)
    }

    /// Remove the first phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                tracing::info!(name = %self.name, phone = %phone, "Phone number removed");
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// Both values are validated before anything else. Editing to the same
    /// number, or to one stored elsewhere on the record, is a
    /// [`EditOutcome::Conflict`] and changes nothing.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if either number is malformed
    /// - `BookError::PhoneNotFound` if `old` is not stored on this record
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<EditOutcome> {
        let old = Phone::new(old).map_err(|err| self.reject_phone(old, err))?;
        let new = Phone::new(new).map_err(|err| self.reject_phone(new, err))?;

        let index = self
            .phones
            .iter()
            .position(|p| p == &old)
            .ok_or_else(|| BookError::PhoneNotFound(old.as_str().to_string()))?;

        if new == old || self.phones.contains(&new) {
            tracing::debug!(
                name = %self.name,
                old = %old,
                new = %new,
                "New phone number already exists for this contact or is the same as the old one"
            );
            return Ok(EditOutcome::Conflict);
        }

        tracing::info!(name = %self.name, old = %old, new = %new, "Phone number has been updated");
        self.phones[index] = new;
        Ok(EditOutcome::Updated)
    }

    /// The first stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.days_to_birthday()
    }

    fn reject_phone(&self, raw: &str, err: ValidationError) -> ValidationError {
        tracing::warn!(name = %self.name, phone = %raw, "Invalid phone number format");
        err
    }

    fn reject_birthday(&self, raw: &str, err: ValidationError) -> ValidationError {
        tracing::warn!(name = %self.name, birthday = %raw, "Invalid birthday format");
        err
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
