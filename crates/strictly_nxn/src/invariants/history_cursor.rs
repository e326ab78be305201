//! History cursor invariant: the live board is the snapshot under the cursor.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `history[history_index] == board`, and the history starts
/// from an empty board of the configured size.
pub struct HistoryCursorInvariant;

impl Invariant<GameState> for HistoryCursorInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let starts_empty = history
            .first()
            .is_some_and(|first| *first == Board::new(game.config().board_size()));

        starts_empty && history.get(game.history_index()) == Some(game.board())
    }

    fn description() -> &'static str {
        "Board matches the history snapshot under the cursor"
    }
}
