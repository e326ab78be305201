//! Game orchestration between players.

use crate::players::Player;
use crate::Command;
use anyhow::Result;
use strictly_nxn::{
    Board, GameConfig, GameMode, GameStatus, Move, MoveError, MoveOutcome, Player as Mark, Score,
    Session,
};
use std::ops::RangeInclusive;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game started.
    Started {
        /// Board size and win length.
        config: GameConfig,
        /// Play mode.
        mode: GameMode,
    },
    /// The board changed; it is `to_move`'s turn.
    BoardChanged {
        /// Board after the change.
        board: Board,
        /// Mark to move next.
        to_move: Mark,
        /// Status after the change.
        status: GameStatus,
    },
    /// The engine is thinking.
    Thinking {
        /// Mark the engine plays.
        player: Mark,
    },
    /// A move was accepted.
    MoveMade(Move),
    /// A move was refused; nothing changed.
    MoveRejected(MoveError),
    /// The game finished.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Score including this game.
        score: Score,
    },
    /// A move was taken back, or there was nothing to take back.
    Undone {
        /// False if the history was already at its start.
        undone: bool,
    },
    /// The play mode changed.
    ModeChanged(GameMode),
    /// A win-length change was applied or refused.
    WinLengthChanged {
        /// Requested length.
        win_length: usize,
        /// False if the length was out of range.
        accepted: bool,
        /// Win lengths the current board accepts.
        allowed: RangeInclusive<usize>,
    },
    /// Current score, on request.
    Score(Score),
    /// The score was cleared.
    ScoreReset,
    /// Help text, on request.
    Help,
    /// A line could not be parsed.
    Invalid {
        /// The line as typed.
        input: String,
        /// Why it failed.
        reason: String,
    },
    /// The player left.
    Quit,
}

/// Drives a [`Session`] with commands from two players.
///
/// The human player answers whenever the engine is not to move; in
/// two-player mode that covers both marks.
pub struct Orchestrator {
    session: Session,
    human: Box<dyn Player>,
    automated: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: Session,
        human: Box<dyn Player>,
        automated: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            automated,
            event_tx,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the game loop until a player quits.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!(
            human = self.human.name(),
            automated = self.automated.name(),
            "Starting game orchestration"
        );
        self.announce_game()?;

        loop {
            let automated = self.session.automated_to_move();
            if automated {
                self.emit(GameEvent::Thinking {
                    player: self.session.state().current_player(),
                })?;
            }

            let player = if automated {
                &mut self.automated
            } else {
                &mut self.human
            };
            debug!(player = player.name(), "Waiting for command");
            let command = player.next_command(&self.session).await?;

            if !self.dispatch(command)? {
                info!("Player quit");
                return Ok(());
            }
        }
    }

    /// Applies one command. Returns false when the loop should stop.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Play(pos) => {
                let result = self.session.play(pos);
                self.after_move(result)?;
            }
            Command::Scheduled(pending) => {
                let result = self.session.apply_scheduled(pending);
                self.after_move(result)?;
            }
            Command::Undo => {
                let undone = self.session.undo();
                self.emit(GameEvent::Undone { undone })?;
                if undone {
                    self.announce_board()?;
                }
            }
            Command::Reset {
                board_size,
                win_length,
            } => {
                self.session.reset(board_size, win_length);
                self.announce_game()?;
            }
            Command::Mode(mode) => {
                self.session.change_mode(mode);
                self.emit(GameEvent::ModeChanged(mode))?;
                self.announce_game()?;
            }
            Command::WinLength(k) => {
                let accepted = self.session.change_win_length(k);
                self.emit(GameEvent::WinLengthChanged {
                    win_length: k,
                    accepted,
                    allowed: self.session.state().config().available_win_lengths(),
                })?;
            }
            Command::Score => self.emit(GameEvent::Score(*self.session.score()))?,
            Command::ResetScore => {
                self.session.reset_score();
                self.emit(GameEvent::ScoreReset)?;
            }
            Command::Help => self.emit(GameEvent::Help)?,
            Command::Invalid { input, reason } => {
                warn!(%input, %reason, "Ignoring invalid input");
                self.emit(GameEvent::Invalid {
                    input,
                    reason: reason.to_string(),
                })?;
            }
            Command::Quit => {
                self.emit(GameEvent::Quit)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn after_move(&mut self, result: Result<MoveOutcome, MoveError>) -> Result<()> {
        match result {
            Ok(outcome) => {
                self.emit(GameEvent::MoveMade(outcome.action))?;
                self.announce_board()?;
                if outcome.status.is_terminal() {
                    self.emit(GameEvent::GameOver {
                        status: outcome.status,
                        score: *self.session.score(),
                    })?;
                }
            }
            Err(e) => self.emit(GameEvent::MoveRejected(e))?,
        }
        Ok(())
    }

    fn announce_game(&self) -> Result<()> {
        self.emit(GameEvent::Started {
            config: *self.session.state().config(),
            mode: self.session.mode(),
        })?;
        self.announce_board()
    }

    fn announce_board(&self) -> Result<()> {
        let state = self.session.state();
        self.emit(GameEvent::BoardChanged {
            board: state.board().clone(),
            to_move: state.current_player(),
            status: state.status(),
        })
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}
