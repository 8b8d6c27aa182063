//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record, book and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone equal to the given value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// A command received the wrong number of arguments
    #[error("Missing arguments: {0}")]
    MissingArguments(&'static str),
}

/// Errors that can occur while loading or saving the book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid book document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The book could not be loaded at startup
    #[error("Failed to load address book: {0}")]
    Load(#[source] StorageError),

    /// The book could not be saved at shutdown
    #[error("Failed to save address book: {0}")]
    Save(#[source] StorageError),

    /// Reading commands or writing replies failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
