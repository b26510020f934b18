//! Administrative console commands.
use core::str::FromStr;

use armorset_runtime::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Re-read the set directory and replace the registry.
    Reload,
    /// List loaded sets.
    Sets,
    /// Show a player's compiled bonuses.
    Bonus(PlayerId),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Usage("help"));
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "reload" => Command::Reload,
            "sets" => Command::Sets,
            "bonus" => {
                let player = words
                    .next()
                    .and_then(|id| id.parse().ok())
                    .ok_or(CommandError::Usage("bonus <player-id>"))?;
                Command::Bonus(PlayerId(player))
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" | "stop" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
reload             re-read set definitions
sets               list loaded sets
bonus <player-id>  show a player's set bonuses
quit               stop the server";
