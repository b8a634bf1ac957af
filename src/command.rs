//! Line commands accepted by the interactive session

use std::str::FromStr;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a value and rebuild the scene
    Add(String),
    /// Delete the first matching value and rebuild the scene
    Delete(String),
    /// Drop every node and rebuild the scene
    Clear,
    /// Print the list and the scene contents
    Show,
    /// Print the current projection as JSON
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <value>     append a node
  delete <value>  delete the first node holding <value>
  clear           remove every node
  show            print the list and scene objects
  json            print the projected layout as JSON
  help            show this text
  quit            leave the session";

/// Reasons a line could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseError;

    /// Parse `<verb> [value]`. The value is everything after the verb with
    /// surrounding whitespace trimmed; it may be empty.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "add" | "a" => Ok(Self::Add(rest.to_owned())),
            "delete" | "del" | "d" => Ok(Self::Delete(rest.to_owned())),
            "clear" => Ok(Self::Clear),
            "show" | "ls" => Ok(Self::Show),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}
