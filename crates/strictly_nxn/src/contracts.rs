//! Move validation as pre- and postconditions.
//!
//! A move is accepted only if every precondition holds on the current
//! state. After the move, the postcondition compares the old and new
//! states and re-checks the game invariants.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet};
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Conditions around a state transition `S --A--> S`.
pub trait Contract<S, A> {
    /// Rejects `action` if it cannot be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Rejects a transition whose result breaks an invariant.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The position must be on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects positions outside the board.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().in_bounds(*pos) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(*pos))
        }
    }
}

/// Precondition: nobody has played the square yet.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(*pos))
        }
    }
}

/// Composite precondition: the game is live, the square is on the board and empty.
pub struct LegalMove;

impl LegalMove {
    /// Runs every move precondition, cheapest first.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(pos, game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Before: the game is live and the square is on the board and empty.
/// After: the cursor advanced by one and [`GameInvariants`] hold.
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history_index() != before.history_index() + 1 {
            warn!(
                before = before.history_index(),
                after = after.history_index(),
                "History cursor did not advance"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history cursor did not advance".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let broken: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
            warn!(?broken, "Invariants broken after move");
            MoveError::InvariantViolation(broken.join("; "))
        })
    }
}
