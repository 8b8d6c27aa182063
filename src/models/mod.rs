//! Data models for the contact book.
//!
//! This module contains the contact record, the address book that owns all
//! records, and the upcoming-birthday entry the book reports.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::Record;
pub use upcoming::UpcomingBirthday;
