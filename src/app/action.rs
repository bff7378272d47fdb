use std::fmt::{self, Write};
use std::str::FromStr;

use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, EnumProperty, EnumIter)]
pub enum Action {
    #[strum(props(Cmd = "/generate", Help = "Generate a random nickname and check it"))]
    Generate,

    #[strum(props(Cmd = "/help", Help = "List available commands"))]
    Help,

    #[strum(props(Cmd = "/exit", Help = "Exit the application"))]
    Exit,

    /// Any other line is a candidate nickname
    Check(String),
}

#[derive(Debug, PartialEq)]
pub enum ActionParseError {
    UnknownCommand(String),
}

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActionParseError::UnknownCommand(cmd) => {
                write!(f, "unknown command {}, type /help for the list", cmd)
            }
        }
    }
}

impl std::error::Error for ActionParseError {}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if !input.starts_with('/') {
            return Ok(Action::Check(input.to_string()));
        }

        let cmd = input.split_whitespace().next().unwrap_or(input);
        match cmd.as_bytes() {
            b"/generate" | b"/gen" => Ok(Action::Generate),
            b"/help" => Ok(Action::Help),
            b"/exit" | b"/quit" => Ok(Action::Exit),
            _ => Err(Self::Err::UnknownCommand(cmd.to_string())),
        }
    }
}

impl Action {
    pub fn help() -> String {
        let mut result = String::from("Type a nickname and press Enter to check it.\n");
        for action in Action::iter() {
            if let Some(cmd) = action.get_str("Cmd") {
                let _ = writeln!(
                    result,
                    "{:<10} {}",
                    cmd,
                    action.get_str("Help").unwrap_or_default()
                );
            }
        }
        result.trim_end().to_string()
    }
}
