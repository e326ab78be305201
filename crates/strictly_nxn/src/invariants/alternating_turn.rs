//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: Players alternate turns.
///
/// The mark added by snapshot `i + 1` belongs to the player to move after
/// `i` moves, and the current player matches the cursor's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let alternates = game.history().windows(2).enumerate().all(|(i, pair)| {
            let expected = Player::to_move_after(i);
            pair[0]
                .squares()
                .zip(pair[1].squares())
                .filter(|(a, b)| a != b)
                .all(|(_, added)| added == Square::Occupied(expected))
        });

        alternates && game.current_player() == Player::to_move_after(game.history_index())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
