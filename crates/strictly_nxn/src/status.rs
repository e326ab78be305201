//! Game status derived from the board.

use super::Player;
use super::rules;
use super::{Board, GameConfig};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
///
/// `Won` and `Drawn` are terminal; only `InProgress` accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Drawn,
}

impl GameStatus {
    /// Classifies a board under the given config.
    #[instrument(skip(board), fields(size = board.size(), win_length = config.win_length()))]
    pub fn of(board: &Board, config: &GameConfig) -> Self {
        if let Some(winner) = rules::check_winner(board, config) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Drawn)
    }

    /// Returns true if no more moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
