//! Command parser
//!
//! Parses one input line into a viewer command. Plain text is a search;
//! lines starting with `:` are commands.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search for a username (may be blank; the search state rejects that)
    Search(String),
    /// Click a map node by repository name or 1-based number
    Open(String),
    /// Dismiss the detail panel
    Close,
    /// Pointer enters the map
    Hover,
    /// Pointer leaves the map
    Leave,
    Dashboard,
    Map,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Search(line.to_string()));
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match name.as_str() {
        "open" | "o" => arg
            .map(|a| Command::Open(a.to_string()))
            .ok_or_else(|| CommandError::MissingArgument(name.clone())),
        "close" | "c" => Ok(Command::Close),
        "hover" => Ok(Command::Hover),
        "leave" => Ok(Command::Leave),
        "dashboard" | "d" => Ok(Command::Dashboard),
        "map" | "m" => Ok(Command::Map),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::UnknownCommand(name.clone())),
    }
}

/// Help text listing every command
pub fn help_text() -> &'static str {
    "Type a GitHub username and press enter to search.\n\
     \n\
     Commands:\n\
     \x20 :open <name|#>  show details for a repository on the map\n\
     \x20 :close          close the detail panel\n\
     \x20 :hover          pause the map rotation\n\
     \x20 :leave          resume the map rotation\n\
     \x20 :dashboard      show the profile dashboard\n\
     \x20 :map            show the repository map\n\
     \x20 :help           show this help\n\
     \x20 :quit           exit\n"
}
