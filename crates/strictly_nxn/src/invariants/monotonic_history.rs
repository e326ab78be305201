//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: consecutive snapshots differ in exactly one square, which
/// goes from empty to occupied.
///
/// Squares are never overwritten or cleared by a move.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let mut changed = pair[0].squares().zip(pair[1].squares()).filter(|(a, b)| a != b);
            let first = changed.next();
            matches!(first, Some((Square::Empty, Square::Occupied(_)))) && changed.next().is_none()
        })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark to an empty square"
    }
}
