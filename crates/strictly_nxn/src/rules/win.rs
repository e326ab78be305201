//! Win detection.

use super::lines::{Window, windows};
use crate::{Board, GameConfig, Player, Square};
use tracing::instrument;

/// Returns the first winning window and its owner.
///
/// Windows are scanned in [`windows`] order, so on a malformed board with
/// several complete lines the earliest one is reported.
#[instrument(skip(board), fields(size = board.size(), win_length = config.win_length()))]
pub fn winning_line(board: &Board, config: &GameConfig) -> Option<(Player, Window)> {
    windows(board.size(), config.win_length()).find_map(|window| {
        let mut squares = window.positions().map(|pos| board.get(pos));
        let Some(Some(Square::Occupied(first))) = squares.next() else {
            return None;
        };
        squares
            .all(|square| square == Some(Square::Occupied(first)))
            .then_some((first, window))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has `win_length` marks in a row
/// horizontally, vertically or diagonally, `None` otherwise.
pub fn check_winner(board: &Board, config: &GameConfig) -> Option<Player> {
    winning_line(board, config).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::rules::Direction;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&Board::new(3), &config), None);
    }

    #[test]
    fn test_winner_top_row() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&board(&["XXX", "OO.", "..."]), &config), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&board(&["XO.", "XO.", ".OX"]), &config), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&board(&["O.X", ".OX", "..O"]), &config), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&board(&["O.X", ".XO", "X.."]), &config), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let config = GameConfig::default();
        assert_eq!(check_winner(&board(&["XX.", "O.O", "..."]), &config), None);
    }

    #[test]
    fn test_win_length_shorter_than_board() {
        let config = GameConfig::new(5, 3).unwrap();
        let b = board(&[".....", ".....", "..XXX", ".....", "....."]);
        assert_eq!(check_winner(&b, &config), Some(Player::X));

        let four = GameConfig::new(5, 4).unwrap();
        assert_eq!(check_winner(&b, &four), None);
    }

    #[test]
    fn test_longer_run_still_wins() {
        let config = GameConfig::new(6, 4).unwrap();
        let b = board(&["......", "OOOOO.", "......", "......", "......", "......"]);
        assert_eq!(check_winner(&b, &config), Some(Player::O));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Unreachable through play: column 0 is O, row 3 is X.
        let four = GameConfig::new(4, 3).unwrap();
        let b = board(&["O...", "O...", "O...", ".XXX"]);
        let (player, window) = winning_line(&b, &four).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(window.direction, Direction::Horizontal);
        assert_eq!(window.start, Position::new(3, 1));

        let config = GameConfig::default();
        let b = board(&["O.X", "O.X", "O.X"]);
        // Column 0 (O) is scanned before column 2 (X).
        assert_eq!(check_winner(&b, &config), Some(Player::O));
    }

    #[test]
    fn test_idempotent() {
        let config = GameConfig::new(4, 3).unwrap();
        let b = board(&["X...", ".X..", "..X.", "OOO."]);
        let first = check_winner(&b, &config);
        assert_eq!(first, check_winner(&b, &config));
        // The row of O is found before the X diagonal.
        assert_eq!(first, Some(Player::O));
    }
}
