//! Running score across games.

use super::Player;
use super::status::GameStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per player and draws, for the lifetime of a session.
///
/// Counts only grow; [`Score::reset`] is the single way back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Score {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. Returns false for a game still in progress.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::InProgress => return false,
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
        }
        debug!(score = %self, "Score updated");
        true
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games finished.
    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears the tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} / O {} / draws {} ({} games)",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.total_games()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut score = Score::new();
        assert!(score.record(GameStatus::Won(Player::X)));
        assert!(score.record(GameStatus::Won(Player::X)));
        assert!(score.record(GameStatus::Won(Player::O)));
        assert!(score.record(GameStatus::Drawn));

        assert_eq!(score.wins(Player::X), 2);
        assert_eq!(score.wins(Player::O), 1);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.total_games(), 4);
    }

    #[test]
    fn test_in_progress_not_recorded() {
        let mut score = Score::new();
        assert!(!score.record(GameStatus::InProgress));
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_reset() {
        let mut score = Score::new();
        score.record(GameStatus::Drawn);
        score.reset();
        assert_eq!(score.total_games(), 0);
    }

    #[test]
    fn test_display() {
        let mut score = Score::new();
        score.record(GameStatus::Won(Player::O));
        assert_eq!(score.to_string(), "X 0 / O 1 / draws 0 (1 games)");
    }
}
