//! Shared behavior of validated contact fields.

use super::errors::ValidationError;

/// A scalar value whose format is checked on every assignment.
///
/// Implementors only provide the rule (`validate`) and the constructor
/// (`parse`); reassignment goes through [`Field::set_value`], so an invalid
/// value can never be observed in a stored field.
pub trait Field: Sized {
    /// Check whether `raw` satisfies this field's format.
    fn validate(raw: &str) -> bool;

    /// Build a field from `raw`, failing if it does not validate.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Replace the current value with `raw`.
    ///
    /// On error the previous value is kept.
    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
