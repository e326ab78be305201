//! First-class action types.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::status::GameStatus;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Result of an accepted move.
///
/// Returned exactly once per accepted move so the caller can react
/// to a finished game (e.g. update the score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub action: Move,
    /// Status of the game after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Winner produced by this move, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// True if this move filled the board without a winner.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }
}

/// Reason a move was rejected. The game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is off the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(Position),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A scheduled move was computed for a board that has since changed.
    #[display("Move was computed for version {} but the session is at version {}", computed_for, current)]
    Stale {
        /// Session version the move was computed for.
        computed_for: u64,
        /// Session version when the move arrived.
        current: u64,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
