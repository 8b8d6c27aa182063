//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and parse format for every date the book shows.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("date pattern is a valid regex")
});

/// A birthday parsed from `DD.MM.YYYY`.
///
/// The shape check runs before calendar parsing so that inputs such as
/// `1.3.24` are rejected even though chrono would read them.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("02.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "02.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the value has the wrong shape
    /// or names a day that does not exist (e.g. `30.02.2024`).
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !DATE_SHAPE.is_match(&date) {
            return Err(ValidationError::InvalidDate(date));
        }

        match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
            Ok(parsed) => Ok(Self(parsed)),
            Err(_) => Err(ValidationError::InvalidDate(date)),
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize in display format
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
