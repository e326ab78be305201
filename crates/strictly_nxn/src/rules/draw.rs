//! Draw detection.

use super::win::check_winner;
use crate::{Board, GameConfig, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_drawn(board: &Board, config: &GameConfig) -> bool {
    is_full(board) && check_winner(board, config).is_none()
}
