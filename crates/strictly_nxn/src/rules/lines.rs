//! Fixed-length windows along the four line directions.

use crate::Position;
use std::ops::Range;

/// A line direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Position `offset` steps from `start`.
    fn step(self, start: Position, offset: usize) -> Position {
        match self {
            Direction::Horizontal => Position::new(start.row, start.col + offset),
            Direction::Vertical => Position::new(start.row + offset, start.col),
            Direction::Diagonal => Position::new(start.row + offset, start.col + offset),
            Direction::AntiDiagonal => Position::new(start.row + offset, start.col - offset),
        }
    }

    /// Start rows and columns keeping a window of `length` on a `size` board.
    ///
    /// `last` is `size - length`.
    fn start_ranges(self, size: usize, length: usize, last: usize) -> (Range<usize>, Range<usize>) {
        match self {
            Direction::Horizontal => (0..size, 0..last + 1),
            Direction::Vertical => (0..last + 1, 0..size),
            Direction::Diagonal => (0..last + 1, 0..last + 1),
            Direction::AntiDiagonal => (0..last + 1, length - 1..size),
        }
    }
}

/// `length` consecutive squares starting at `start` in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// First square of the window.
    pub start: Position,
    /// Direction the window extends in.
    pub direction: Direction,
    /// Number of squares.
    pub length: usize,
}

impl Window {
    /// Squares covered by this window, from `start` outwards.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.length).map(move |offset| self.direction.step(self.start, offset))
    }
}

/// Every in-bounds window of `length` squares on a `size`×`size` board.
///
/// Order: rows, then columns, then ↘ diagonals, then ↙ diagonals; within
/// each family start rows ascend, then start columns. Yields nothing if
/// `length` is zero or longer than the board.
pub fn windows(size: usize, length: usize) -> impl Iterator<Item = Window> {
    let last = size.checked_sub(length).filter(|_| length > 0);

    last.into_iter().flat_map(move |last| {
        Direction::ALL.into_iter().flat_map(move |direction| {
            let (rows, cols) = direction.start_ranges(size, length, last);
            rows.flat_map(move |row| {
                cols.clone().map(move |col| Window {
                    start: Position::new(row, col),
                    direction,
                    length,
                })
            })
        })
    })
}
