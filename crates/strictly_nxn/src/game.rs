//! Game state machine with snapshot history.
//!
//! Every accepted move appends a copy of the board to the history, so
//! undo is a cursor move rather than a reverse computation. Moving past
//! an undone position truncates the redo branch.

use super::action::{Move, MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::status::GameStatus;
use super::{Board, GameConfig, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Complete game state.
///
/// Invariants:
/// - `history[history_index] == board`
/// - `current_player` is X after an even number of moves, O otherwise
/// - `status` is derived from `board` and `config`, never set directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Board>,
    pub(crate) history_index: usize,
    pub(crate) config: GameConfig,
}

impl GameState {
    /// Creates a new game with an empty board; X moves first.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size());
        Self {
            history: vec![board.clone()],
            board,
            current_player: Player::X,
            status: GameStatus::InProgress,
            history_index: 0,
            config,
        }
    }

    /// Replays a sequence of moves from an empty board.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for pos in moves {
            game.apply_move(*pos)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Rejected moves leave the state untouched. On success the status is
    /// re-derived, the turn passes to the opponent and the new board is
    /// pushed onto the history, discarding any undone positions.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(position = %pos, player = %self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        let board = self.board.with_mark(pos, player)?;
        let status = GameStatus::of(&board, &self.config);

        self.history.truncate(self.history_index + 1);
        self.history.push(board.clone());
        self.history_index += 1;
        self.board = board;
        self.status = status;
        self.current_player = player.opponent();

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }

        debug!(%status, history_index = self.history_index, "Move applied");
        Ok(MoveOutcome {
            action: Move::new(player, pos),
            status,
        })
    }

    /// Steps back one position in the history.
    ///
    /// Returns false at the start of the history. The turn is restored by
    /// parity and the status is re-derived from the restored board under
    /// the current config.
    #[instrument(skip(self), fields(history_index = self.history_index))]
    pub fn undo(&mut self) -> bool {
        if self.history_index == 0 {
            debug!("Nothing to undo");
            return false;
        }

        self.history_index -= 1;
        self.board = self.history[self.history_index].clone();
        self.current_player = Player::to_move_after(self.history_index);
        self.status = GameStatus::of(&self.board, &self.config);

        debug!(
            history_index = self.history_index,
            status = %self.status,
            "Undid move"
        );
        true
    }

    /// Replaces the game with a fresh one.
    ///
    /// A new board size brings that size's default win length. Invalid
    /// sizes or win lengths are ignored and the previous value is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self, board_size: Option<usize>, win_length: Option<usize>) {
        let mut config = match board_size {
            Some(size) => GameConfig::for_size(size).unwrap_or_else(|| {
                warn!(size, "Ignoring invalid board size");
                self.config
            }),
            None => self.config,
        };

        if let Some(k) = win_length {
            match config.with_win_length(k) {
                Some(updated) => config = updated,
                None => warn!(win_length = k, "Ignoring invalid win length"),
            }
        }

        info!(
            board_size = config.board_size(),
            win_length = config.win_length(),
            "Starting new game"
        );
        *self = Self::new(config);
    }

    /// Changes the win length without touching the board or history.
    ///
    /// The current status is not re-evaluated; the new length applies
    /// from the next classification onward. Returns false (and changes
    /// nothing) unless `3 <= k <= board_size`.
    #[instrument(skip(self))]
    pub fn change_win_length(&mut self, k: usize) -> bool {
        match self.config.with_win_length(k) {
            Some(config) => {
                self.config = config;
                debug!(win_length = k, "Win length changed");
                true
            }
            None => {
                warn!(win_length = k, "Ignoring invalid win length");
                false
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Returns true if moves are no longer accepted.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All board snapshots, including undone ones.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Position of the current board in the history.
    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// True if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    /// Empty squares in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        super::rules::legal_moves(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
