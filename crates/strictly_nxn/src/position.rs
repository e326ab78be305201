//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A zero-based `(row, col)` coordinate on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

/// Error returned when a coordinate cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Expected `row col` or `row,col`, got {:?}", _0)]
pub struct ParsePositionError(pub String);

impl std::error::Error for ParsePositionError {}

impl Position {
    /// Parses `row col`, `row,col` or `(row, col)`.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, ParsePositionError> {
        let err = || ParsePositionError(s.to_string());
        let cleaned = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = cleaned
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Self { row, col })
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Position::parse("1 2").unwrap(), Position::new(1, 2));
        assert_eq!(Position::parse("1,2").unwrap(), Position::new(1, 2));
        assert_eq!(Position::parse(" (0, 9) ").unwrap(), Position::new(0, 9));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Position::parse("1").is_err());
        assert!(Position::parse("a b").is_err());
        assert!(Position::parse("1 2 3").is_err());
        assert!(Position::parse("-1 2").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
