//! The assistant session: owns the book for the lifetime of the loop.

use super::command::{parse_input, Command};
use super::handlers;
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Message(String),
    /// Print nothing and keep reading
    Silent,
    /// Print the text and stop
    Exit(String),
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interactive session over an address book.
pub struct Assistant {
    book: AddressBook,
    today: fn() -> NaiveDate,
}

impl Assistant {
    /// Create a session that reads "today" from the local clock.
    pub fn new(book: AddressBook) -> Self {
        Self::with_clock(book, local_today)
    }

    /// Create a session with a fixed source for "today".
    pub fn with_clock(book: AddressBook, today: fn() -> NaiveDate) -> Self {
        Self { book, today }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            return Reply::Silent;
        };
        debug!(?command, args = args.len(), "Dispatching command");

        let book = &mut self.book;
        let result = match command {
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(&args, book),
            Command::Change => handlers::change_contact(&args, book),
            Command::Phone => handlers::show_phone(&args, book),
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(&args, book),
            Command::ShowBirthday => handlers::show_birthday(&args, book),
            Command::Birthdays => handlers::birthdays(book, (self.today)()),
            Command::RemovePhone => handlers::remove_phone(&args, book),
            Command::Delete => handlers::delete_contact(&args, book),
            Command::Unknown(_) => Ok("Invalid command.".to_string()),
        };

        match result {
            Ok(text) => Reply::Message(text),
            Err(err) => {
                debug!(error = %err, "Command failed");
                Reply::Message(handlers::error_message(&err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_of_june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected message, got: {:?}", other),
        }
    }

    #[test]
    fn test_exit_commands() {
        let mut assistant = Assistant::new(AddressBook::new());
        assert_eq!(assistant.handle_line("exit"), Reply::Exit("Good bye!".to_string()));
        assert_eq!(assistant.handle_line("CLOSE"), Reply::Exit("Good bye!".to_string()));
    }

    #[test]
    fn test_blank_and_unknown() {
        let mut assistant = Assistant::new(AddressBook::new());
        assert_eq!(assistant.handle_line("   "), Reply::Silent);
        assert_eq!(message(assistant.handle_line("dance")), "Invalid command.");
        assert_eq!(message(assistant.handle_line("Hello")), "How can I help you?");
    }

    #[test]
    fn test_birthdays_uses_injected_clock() {
        let mut assistant = Assistant::with_clock(AddressBook::new(), first_of_june);
        message(assistant.handle_line("add Jane 1111111111"));
        message(assistant.handle_line("add-birthday Jane 02.06.1990"));
        assert_eq!(
            message(assistant.handle_line("birthdays")),
            "Birthdays this week.\nJane: 03.06.2024"
        );
    }

    #[test]
    fn test_errors_become_messages() {
        let mut assistant = Assistant::new(AddressBook::new());
        assert_eq!(
            message(assistant.handle_line("add Jane 12")),
            "Please enter a 10-digit number."
        );
        assert_eq!(message(assistant.handle_line("phone Jane")), "no contact exists");
        assert!(assistant.into_book().is_empty());
    }
}
