//! Upcoming birthday entry returned by the address book query.

use crate::domain::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact whose birthday greeting is due within the upcoming window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to send the greeting, already moved off weekends
    #[serde(serialize_with = "serialize_date")]
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Greeting date formatted as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.greeting_date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}
