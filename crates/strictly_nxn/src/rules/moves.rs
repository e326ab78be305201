//! Legal move enumeration.

use crate::{Board, Position, Square};

/// Every empty square, in row-major order.
///
/// The order is the tie-break order of the move search.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    board
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .filter(|(_, square)| **square == Square::Empty)
                .map(move |(col, _)| Position::new(row, col))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_all_moves() {
        let moves = legal_moves(&Board::new(4));
        assert_eq!(moves.len(), 16);
        assert_eq!(moves[0], Position::new(0, 0));
        assert_eq!(moves[1], Position::new(0, 1));
        assert_eq!(moves[4], Position::new(1, 0));
    }

    #[test]
    fn test_filters_occupied_in_row_major_order() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            legal_moves(&board),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }
}
