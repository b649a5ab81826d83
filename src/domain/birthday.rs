//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Storage and display format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts single-digit months and days, so the shape is checked first.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// An optional birthday.
///
/// When present, the value is a real calendar date written as `YYYY-MM-DD`.
/// An absent birthday is always valid and holds nothing.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new(Some("1990-05-17")).unwrap();
/// assert_eq!(birthday.value().as_deref(), Some("1990-05-17"));
/// assert!(Birthday::new(Some("2024-02-30")).is_err());
/// assert!(Birthday::new(None).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Create a Birthday from an optional date string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if a value is given and it
    /// is not a real `YYYY-MM-DD` date.
    pub fn new(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(raw) => Self::parse(raw),
            None => Ok(Self(None)),
        }
    }

    /// The stored date rendered as `YYYY-MM-DD`, if any.
    pub fn value(&self) -> Option<String> {
        self.0.map(|date| date.format(BIRTHDAY_FORMAT).to_string())
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether no birthday is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Remove the stored birthday.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` when no birthday is set. See [`Birthday::days_until`].
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_until(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the stored month and day.
    ///
    /// Returns `0` when `today` is the birthday. A 29 February birthday is
    /// celebrated on 28 February in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let date = self.0?;

        let mut next = occurrence_in(today.year(), date)?;
        if next < today {
            next = occurrence_in(today.year() + 1, date)?;
        }

        Some((next - today).num_days())
    }
}

/// The anniversary of `date` in `year`.
fn occurrence_in(year: i32, date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

impl Field for Birthday {
    fn validate(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        // Year 0 parses in chrono's proleptic calendar but is not a calendar year
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .map(|date| Self(Some(date)))
            .ok_or_else(|| ValidationError::InvalidBirthday(raw.to_string()))
    }
}

// Serde support - serialize as optional string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

// Serde support - deserialize from optional string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Birthday::new(s.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}
