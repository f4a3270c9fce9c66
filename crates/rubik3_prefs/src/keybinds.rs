use std::fmt;
use std::str::FromStr;

use rubik3_core::Turn;
use serde::{Deserialize, Serialize};

/// Key bound to a command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: char,
    pub command: Command,
}

/// Action triggered by a key.
///
/// Serialized as a string: a turn in move notation such as `U` or `U'`, or
/// one of `reset` and `quit`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum Command {
    Turn(Turn),
    Reset,
    Quit,
}
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Turn(turn) => write!(f, "{turn}"),
            Command::Reset => write!(f, "reset"),
            Command::Quit => write!(f, "quit"),
        }
    }
}
impl FromStr for Command {
    type Err = rubik3_core::PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reset" => Ok(Command::Reset),
            "quit" => Ok(Command::Quit),
            other => other.parse().map(Command::Turn),
        }
    }
}
impl TryFrom<String> for Command {
    type Error = rubik3_core::PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Command> for String {
    fn from(value: Command) -> Self {
        value.to_string()
    }
}

/// Returns the command bound to `key`. If the key is bound more than once,
/// the first binding wins.
pub fn command_for_key(keybinds: &[Keybind], key: char) -> Option<Command> {
    keybinds.iter().find(|bind| bind.key == key).map(|bind| bind.command)
}
