//! Record model representing one contact in the book.

use crate::domain::{BirthdayDate, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a fixed name, an ordered list of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. All lookups by phone compare
/// the raw string against each stored number and act on the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the key in the address book
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Birthday, if one was added
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            debug!(name = %self.name, phone, "Removing phone");
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// # Errors
    ///
    /// `BookError::PhoneNotFound` if no phone equals `old`; a validation error
    /// if `new` is not a valid phone number. The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.matches(phone))
    }

    /// Validate `date` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, date: &str) -> BookResult<()> {
        let birthday = BirthdayDate::new(date)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
