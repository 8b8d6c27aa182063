//! Domain value objects and types.
//!
//! Validated fields for the contact book. Each constructor enforces its
//! format and returns a `ValidationError` otherwise, so an invalid phone or
//! birthday can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{BirthdayDate, DATE_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
