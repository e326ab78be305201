//! Core domain types for N×N tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player whose turn it is after `moves_played` alternating moves.
    pub fn to_move_after(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character glyph used by the text format.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'x' | 'X' => Some(Square::Occupied(Player::X)),
            'o' | 'O' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The board has fewer than 3 or more than 10 rows.
    #[display("Board size {} is outside {}..={}", _0, Board::MIN_SIZE, Board::MAX_SIZE)]
    SizeOutOfRange(usize),

    /// A row length does not match the number of rows.
    #[display("Row {} has {} squares, expected {}", row, found, expected)]
    Ragged {
        /// Zero-based row index.
        row: usize,
        /// Squares found in the row.
        found: usize,
        /// Squares required (the board size).
        expected: usize,
    },

    /// A character other than `X`, `O` or `.` was found.
    #[display("Unexpected character {:?} in row {}", glyph, row)]
    BadGlyph {
        /// Zero-based row index.
        row: usize,
        /// The offending character.
        glyph: char,
    },
}

impl std::error::Error for BoardParseError {}

/// Square N×N board, stored as rows of squares.
///
/// Deserialization applies the same size and shape checks as parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: Vec<Vec<Square>>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: Vec<Vec<Square>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_squares(raw.rows)
    }
}

impl Board {
    /// Smallest supported board size.
    pub const MIN_SIZE: usize = 3;
    /// Largest supported board size.
    pub const MAX_SIZE: usize = 10;

    /// Creates an empty `size`×`size` board.
    ///
    /// The size is validated by [`GameConfig`], not here.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![Square::Empty; size]; size],
        }
    }

    /// Parses a board from rows of `X`, `O` and `.` characters.
    ///
    /// Whitespace inside a row is ignored.
    #[instrument(skip(rows))]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        Self::check_size(rows.len())?;

        let parsed = rows
            .iter()
            .enumerate()
            .map(|(row, text)| {
                text.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|glyph| Square::from_glyph(glyph).ok_or(BoardParseError::BadGlyph { row, glyph }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_squares(parsed)
    }

    /// Builds a board from rows of squares, rejecting bad sizes and ragged rows.
    pub fn from_squares(rows: Vec<Vec<Square>>) -> Result<Self, BoardParseError> {
        let size = rows.len();
        Self::check_size(size)?;

        if let Some((row, squares)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardParseError::Ragged {
                row,
                found: squares.len(),
                expected: size,
            });
        }
        Ok(Self { rows })
    }

    fn check_size(size: usize) -> Result<(), BoardParseError> {
        if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(BoardParseError::SizeOutOfRange(size))
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the position lies on the board.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), MoveError> {
        let cell = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(MoveError::OutOfBounds(pos))?;
        *cell = square;
        Ok(())
    }

    /// Checks if a square is empty. Off-board positions are not empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// The receiver is untouched.
    pub fn with_mark(&self, pos: Position, player: Player) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player))?;
        Ok(next)
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[Vec<Square>] {
        &self.rows
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares().filter(|s| *s != Square::Empty).count()
    }

    /// Compact text form: rows of glyphs joined by `/`.
    pub fn to_compact(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|s| s.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts rows separated by `/` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, " {}", col)?;
        }
        for (row, squares) in self.rows.iter().enumerate() {
            write!(f, "\n{:>2} ", row)?;
            for square in squares {
                write!(f, " {}", square.glyph())?;
            }
        }
        Ok(())
    }
}

/// Board size and win length of a game.
///
/// Only valid combinations can be constructed, including through
/// deserialization: `3 <= board_size <= 10` and `3 <= win_length <= board_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    board_size: usize,
    win_length: usize,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    board_size: usize,
    win_length: usize,
}

/// A board size and win length that do not make a playable game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No {}×{} game with {} in a row", board_size, board_size, win_length)]
pub struct InvalidGameConfig {
    /// Requested board size.
    pub board_size: usize,
    /// Requested win length.
    pub win_length: usize,
}

impl std::error::Error for InvalidGameConfig {}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidGameConfig;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.board_size, raw.win_length).ok_or(InvalidGameConfig {
            board_size: raw.board_size,
            win_length: raw.win_length,
        })
    }
}

impl GameConfig {
    /// Smallest supported win length.
    pub const MIN_WIN_LENGTH: usize = 3;

    /// Creates a config, or `None` if the combination is invalid.
    #[instrument]
    pub fn new(board_size: usize, win_length: usize) -> Option<Self> {
        let size_ok = (Board::MIN_SIZE..=Board::MAX_SIZE).contains(&board_size);
        let win_ok = (Self::MIN_WIN_LENGTH..=board_size).contains(&win_length);
        (size_ok && win_ok).then_some(Self {
            board_size,
            win_length,
        })
    }

    /// Config for `board_size` with its default win length.
    #[instrument]
    pub fn for_size(board_size: usize) -> Option<Self> {
        Self::new(board_size, Self::default_win_length(board_size))
    }

    /// Builds the nearest valid config, clamping both values into range.
    #[instrument]
    pub fn clamped(board_size: usize, win_length: usize) -> Self {
        let board_size = board_size.clamp(Board::MIN_SIZE, Board::MAX_SIZE);
        Self {
            board_size,
            win_length: win_length.clamp(Self::MIN_WIN_LENGTH, board_size),
        }
    }

    /// Four in a row on 4×4 and larger, three in a row on 3×3.
    pub fn default_win_length(board_size: usize) -> usize {
        if board_size >= 4 { 4 } else { board_size }
    }

    /// Win lengths accepted for a board of this size.
    pub fn available_win_lengths(&self) -> std::ops::RangeInclusive<usize> {
        Self::MIN_WIN_LENGTH..=self.board_size
    }

    /// Returns a copy with a new win length, or `None` if it is out of range.
    pub fn with_win_length(&self, win_length: usize) -> Option<Self> {
        Self::new(self.board_size, win_length)
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Consecutive marks needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            win_length: 3,
        }
    }
}
