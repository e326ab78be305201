//! Commands accepted by the game loop.

use derive_more::Display;
use std::str::FromStr;
use strictly_nxn::{GameMode, PendingMove, Position};
use tracing::instrument;

/// One instruction for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Play(Position),
    /// Apply an engine move computed earlier.
    Scheduled(PendingMove),
    /// Step back one move.
    Undo,
    /// Start a new game, optionally resized.
    Reset {
        /// New board size.
        board_size: Option<usize>,
        /// New win length.
        win_length: Option<usize>,
    },
    /// Switch play mode (starts a new game).
    Mode(GameMode),
    /// Change the win length of the current game.
    WinLength(usize),
    /// Show the running score.
    Score,
    /// Clear the running score.
    ResetScore,
    /// Show the command list.
    Help,
    /// Stop playing.
    Quit,
    /// Input that did not parse.
    Invalid {
        /// The line as typed.
        input: String,
        /// What was wrong with it.
        reason: CommandParseError,
    },
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandParseError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,
    /// The first word is not a command and the line is not a coordinate.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// A command got an argument it cannot use.
    #[display("Bad argument for {}: {}", command, argument)]
    BadArgument {
        /// Command word.
        command: &'static str,
        /// Offending argument.
        argument: String,
    },
    /// A command that needs an argument got none.
    #[display("{} needs an argument", _0)]
    MissingArgument(&'static str),
}

impl std::error::Error for CommandParseError {}

/// Text shown for `help`.
pub const HELP: &str = "\
Commands:
  row col | row,col   place a mark (zero-based)
  undo                take back the last move
  reset [N [K]]       new game, optionally N×N with K in a row
  mode human|automated
  win K               change the win length
  score               show the score
  reset-score         clear the score
  help                show this list
  quit                leave";

impl Command {
    /// Parses a line typed at the prompt.
    ///
    /// Never fails: unparsable lines become [`Command::Invalid`].
    #[instrument]
    pub fn from_line(line: &str) -> Self {
        line.parse().unwrap_or_else(|reason| Command::Invalid {
            input: line.trim().to_string(),
            reason,
        })
    }
}

fn number(command: &'static str, argument: &str) -> Result<usize, CommandParseError> {
    argument.parse().map_err(|_| CommandParseError::BadArgument {
        command,
        argument: argument.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandParseError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let command = match first.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "score" => Command::Score,
            "reset-score" => Command::ResetScore,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "reset" | "new" => {
                let board_size = rest.first().map(|a| number("reset", a)).transpose()?;
                let win_length = rest.get(1).map(|a| number("reset", a)).transpose()?;
                Command::Reset {
                    board_size,
                    win_length,
                }
            }
            "win" => {
                let arg = rest.first().ok_or(CommandParseError::MissingArgument("win"))?;
                Command::WinLength(number("win", arg)?)
            }
            "mode" => {
                let arg = rest.first().ok_or(CommandParseError::MissingArgument("mode"))?;
                let mode = arg.parse().map_err(|_| CommandParseError::BadArgument {
                    command: "mode",
                    argument: arg.to_string(),
                })?;
                Command::Mode(mode)
            }
            _ => {
                let pos = Position::parse(line)
                    .map_err(|_| CommandParseError::Unknown(first.to_string()))?;
                Command::Play(pos)
            }
        };
        Ok(command)
    }
}
