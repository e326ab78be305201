//! Session state: the game, the score and the play mode.
//!
//! The caller owns the [`Session`] and threads it through every command.
//! Each mutation bumps a version counter so a move computed for one board
//! can be recognised as stale once the board has moved on.

use super::action::{MoveError, MoveOutcome};
use super::game::GameState;
use super::score::Score;
use super::search::{SearchReport, analyze};
use super::{GameConfig, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(alias = "human")]
    #[strum(to_string = "human", serialize = "human_vs_human")]
    HumanVsHuman,
    /// A human plays X against the engine playing O.
    #[default]
    #[serde(alias = "automated")]
    #[strum(to_string = "automated", serialize = "human_vs_automated")]
    HumanVsAutomated,
}

impl GameMode {
    /// Mark played by the engine in this mode.
    pub fn automated_player(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAutomated => Some(Player::O),
        }
    }
}

/// An engine move bound to the session version it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    /// Search result.
    pub report: SearchReport,
    /// Mark the move is for.
    pub player: Player,
    /// Session version when the move was computed.
    pub version: u64,
}

impl PendingMove {
    /// Position to play.
    pub fn position(&self) -> Position {
        self.report.position
    }
}

/// A game in progress plus everything that outlives a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    game: GameState,
    score: Score,
    mode: GameMode,
    version: u64,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(config: GameConfig, mode: GameMode) -> Self {
        info!(
            board_size = config.board_size(),
            win_length = config.win_length(),
            %mode,
            "Creating session"
        );
        Self {
            game: GameState::new(config),
            score: Score::new(),
            mode,
            version: 0,
        }
    }

    /// Current game.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Play mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Counter bumped by every change to the game, mode or config.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if the engine should move next.
    pub fn automated_to_move(&self) -> bool {
        !self.game.is_over() && self.mode.automated_player() == Some(self.game.current_player())
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// A move that finishes the game is added to the score exactly once.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.apply_move(pos).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.bump();

        if self.score.record(outcome.status) {
            info!(status = %outcome.status, score = %self.score, "Game over");
        }
        Ok(outcome)
    }

    /// Undoes the last move. Returns false if there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let undone = self.game.undo();
        if undone {
            self.bump();
        }
        undone
    }

    /// Starts a new game, optionally with a new board size or win length.
    ///
    /// The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self, board_size: Option<usize>, win_length: Option<usize>) {
        self.game.reset(board_size, win_length);
        self.bump();
    }

    /// Switches the play mode and starts a new game with the same config.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.game.reset(None, None);
        self.bump();
    }

    /// Changes the win length of the current game. See [`GameState::change_win_length`].
    #[instrument(skip(self))]
    pub fn change_win_length(&mut self, k: usize) -> bool {
        let changed = self.game.change_win_length(k);
        if changed {
            self.bump();
        }
        changed
    }

    /// Clears the score.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    /// Computes the engine's move if it is the engine's turn.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn automated_move(&self) -> Option<PendingMove> {
        if !self.automated_to_move() {
            return None;
        }
        let player = self.game.current_player();
        let report = analyze(self.game.board(), player, self.game.config())?;
        debug!(position = %report.position, ?report.tactic, "Engine move ready");
        Some(PendingMove {
            report,
            player,
            version: self.version,
        })
    }

    /// Applies a previously computed engine move.
    ///
    /// Rejected with [`MoveError::Stale`] if anything changed since the move
    /// was computed.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn apply_scheduled(&mut self, pending: PendingMove) -> Result<MoveOutcome, MoveError> {
        if pending.version != self.version {
            warn!(
                computed_for = pending.version,
                current = self.version,
                "Discarding stale engine move"
            );
            return Err(MoveError::Stale {
                computed_for: pending.version,
                current: self.version,
            });
        }
        self.play(pending.position())
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default(), GameMode::default())
    }
}
