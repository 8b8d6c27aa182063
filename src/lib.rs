//! Contact Book - a personal contact directory with birthday greetings.
//!
//! Stores names, phone numbers and birthdays, validates their formats, and
//! reports which contacts should be greeted within the next week. Greetings
//! that land on a weekend move to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (phone numbers, birthdays)
//! - **models**: Records, the address book and upcoming-birthday entries
//! - **services**: Greeting-date computation
//! - **repositories**: Loading and saving the address book
//! - **cli**: The interactive command loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use cli::Assistant;
pub use config::Config;
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
