//! Static evaluation of non-terminal positions.
//!
//! Every window of `win_length` squares that only one side occupies is a
//! potential line for that side, worth `10^marks`. Windows holding both
//! marks are dead and score nothing.

use super::rules::{Window, windows};
use super::{Board, GameConfig, Player, Square};
use tracing::instrument;

/// Base of the per-window score.
const WINDOW_BASE: i64 = 10;

/// Scores `board` from `player`'s point of view.
///
/// Positive values favour `player`. Runs in O(N²·K).
#[instrument(skip(board), fields(size = board.size(), win_length = config.win_length()))]
pub fn evaluate(board: &Board, config: &GameConfig, player: Player) -> i64 {
    windows(board.size(), config.win_length())
        .map(|window| score_window(board, window, player))
        .sum()
}

/// Contribution of a single window.
fn score_window(board: &Board, window: Window, player: Player) -> i64 {
    let (mut mine, mut theirs) = (0u32, 0u32);
    for pos in window.positions() {
        match board.get(pos) {
            Some(Square::Occupied(p)) if p == player => mine += 1,
            Some(Square::Occupied(_)) => theirs += 1,
            _ => {}
        }
    }

    match (mine, theirs) {
        (0, 0) => 0,
        (a, 0) => WINDOW_BASE.pow(a),
        (0, b) => -WINDOW_BASE.pow(b),
        _ => 0,
    }
}
