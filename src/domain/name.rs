//! Name value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name.
///
/// Names are opaque text: they are not trimmed or normalized, and the only
/// rejected value is the empty string. Uniqueness is the address book's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::validate(&name) {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn validate(raw: &str) -> bool {
        !raw.is_empty()
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
