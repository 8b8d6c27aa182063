//! The address book: every record, keyed by contact name.

use super::record::Record;
use super::upcoming::UpcomingBirthday;
use crate::services::birthday_scheduler;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Name-to-record store.
///
/// Iteration follows insertion order. Names are unique keys; adding a record
/// whose name is already present replaces the stored record in its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

/// On-disk shape of the book.
#[derive(Serialize)]
struct BookDocument<'a> {
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct OwnedBookDocument {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(name = %name, "Replaced existing record");
        } else {
            debug!(name = %name, "Added record");
        }
    }

    /// Record stored under exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under exactly `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, returning it. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(name, "Deleted record");
        }
        removed
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose greeting falls within the upcoming window from `today`.
    ///
    /// Entries follow the book's insertion order, not date order. Records
    /// without a birthday never appear.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greeting_date = birthday_scheduler::greeting_date(birthday, today)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    greeting_date,
                })
            })
            .collect()
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BookDocument {
            contacts: self.records().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = OwnedBookDocument::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in document.contacts {
            book.add_record(record);
        }
        Ok(book)
    }
}
