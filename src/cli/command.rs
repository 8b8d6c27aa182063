//! Command parsing for the interactive loop.

/// A command recognised by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Exit,
    Unknown(String),
}

impl Command {
    /// Map an already lower-cased command token to a command.
    pub fn from_token(token: &str) -> Self {
        match token {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Split a line into a command and its arguments.
///
/// The command token is lower-cased; arguments are kept verbatim. Returns
/// `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = Command::from_token(&parts.next()?.to_lowercase());
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
