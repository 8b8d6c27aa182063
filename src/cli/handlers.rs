//! Command handlers.
//!
//! Each handler checks its argument count, calls into the address book and
//! returns the text to print. Failures come back as `BookError` and are
//! turned into user-facing text by [`error_message`].

use crate::domain::ValidationError;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

pub const NAME_AND_PHONE_USAGE: &str = "Give me name and phone please.";
pub const CHANGE_USAGE: &str = "Give me name, old phone and new phone please.";
pub const NAME_USAGE: &str = "Give me name please.";
pub const NAME_AND_DATE_USAGE: &str = "Give me name and date please.";

/// User-facing text for a failed command.
pub fn error_message(err: &BookError) -> String {
    match err {
        BookError::Validation(ValidationError::InvalidPhone(_)) => {
            "Please enter a 10-digit number.".to_string()
        }
        BookError::Validation(ValidationError::InvalidDate(_)) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
        BookError::ContactNotFound(_) => "no contact exists".to_string(),
        BookError::PhoneNotFound(_) => "information does not exist.".to_string(),
        BookError::MissingArguments(usage) => usage.to_string(),
    }
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = args else {
        return Err(BookError::MissingArguments(NAME_AND_PHONE_USAGE));
    };

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name.as_str());
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one of a contact's phones.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old, new] = args else {
        return Err(BookError::MissingArguments(CHANGE_USAGE));
    };

    existing_mut(book, name)?.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show a contact.
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = first_arg(args)?;
    Ok(existing(book, name)?.to_string())
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("contact list is empty.".to_string());
    }

    Ok(book
        .records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, date] = args else {
        return Err(BookError::MissingArguments(NAME_AND_DATE_USAGE));
    };

    existing_mut(book, name)?.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = first_arg(args)?;
    Ok(match existing(book, name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday date not added.".to_string(),
    })
}

/// `birthdays`: greetings due within the next week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> BookResult<String> {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("There are no birthdays this week.".to_string());
    }

    let mut lines = vec!["Birthdays this week.".to_string()];
    lines.extend(upcoming.iter().map(ToString::to_string));
    Ok(lines.join("\n"))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = args else {
        return Err(BookError::MissingArguments(NAME_AND_PHONE_USAGE));
    };

    existing_mut(book, name)?.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = first_arg(args)?;
    book.delete(name)
        .map(|_| "Contact deleted.".to_string())
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn first_arg(args: &[String]) -> BookResult<&str> {
    args.first()
        .map(String::as_str)
        .ok_or(BookError::MissingArguments(NAME_USAGE))
}

fn existing<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn existing_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}
