//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "invalid phone number format: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "invalid birthday format: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}
