//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Outcomes such as a duplicate phone or a missing record are not errors; they are
//! reported through return values (see [`crate::models::AddOutcome`]).

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A supplied value failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not stored on the record
    #[error("phone number not found: {0}")]
    PhoneNotFound(String),

    /// A caller precondition was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
