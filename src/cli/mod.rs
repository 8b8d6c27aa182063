//! Interactive command loop.
//!
//! Reads one command per line, dispatches it against the address book and
//! writes the reply. The loop ends on `close`/`exit` or at end of input.

pub mod command;
pub mod handlers;
mod session;

pub use command::{parse_input, Command};
pub use session::{Assistant, Reply};

use crate::error::SessionError;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the loop until an exit command or end of input.
pub fn run<R, W>(assistant: &mut Assistant, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }

        // Undecodable bytes become U+FFFD and the line is handled like any other
        let line = String::from_utf8_lossy(&buf);
        match assistant.handle_line(&line) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Silent => {}
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    Ok(())
}

/// Load the book, run the loop over `input`/`output`, then save the book.
///
/// The book is saved even when the loop stops on an I/O error; a save
/// failure takes precedence over that error. Returns the saved book.
pub fn run_session<P, R, W>(
    repository: &P,
    input: R,
    output: W,
) -> Result<AddressBook, SessionError>
where
    P: AddressBookRepository,
    R: BufRead,
    W: Write,
{
    let book = repository.load().map_err(SessionError::Load)?;
    info!(contacts = book.len(), "Starting session");

    let mut assistant = Assistant::new(book);
    let session = run(&mut assistant, input, output);
    if let Err(e) = &session {
        error!("Command loop stopped: {}", e);
    }

    if let Err(e) = repository.save(assistant.book()) {
        error!("Failed to save address book: {}", e);
        return Err(SessionError::Save(e));
    }

    session?;
    Ok(assistant.into_book())
}
