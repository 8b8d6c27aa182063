//! Application service layer.
//!
//! Business logic that sits beside the models rather than inside them.

pub mod birthday_scheduler;

pub use birthday_scheduler::{greeting_date, UPCOMING_WINDOW_DAYS};
