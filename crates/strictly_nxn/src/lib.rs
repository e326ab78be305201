//! Pure N×N tic-tac-toe game logic.
//!
//! Boards from 3×3 to 10×10 with a configurable win length, a snapshot
//! history with undo, and an automated opponent.
//!
//! # Architecture
//!
//! - **Rules**: winner, draw and legal-move functions over a [`Board`]
//! - **Game**: [`GameState`] applies moves under contracts and keeps history
//! - **Eval**: heuristic score of a non-terminal board
//! - **Search**: tactics plus alpha-beta minimax for the engine's move
//! - **Session**: score, play mode and stale-move detection
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{GameConfig, Player, Position, choose_move, GameState};
//!
//! let mut game = GameState::new(GameConfig::default());
//! game.apply_move(Position::new(1, 1)).unwrap();
//!
//! let reply = choose_move(game.board(), Player::O, game.config()).unwrap();
//! assert_eq!(reply, Position::new(0, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod eval;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod search;
mod session;
mod status;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{Contract, GameNotOver, InBounds, LegalMove, MoveContract, SquareIsEmpty};
pub use eval::evaluate;
pub use game::GameState;
pub use position::{ParsePositionError, Position};
pub use score::Score;
pub use search::{SearchReport, Tactic, WIN_SCORE, analyze, choose_move, search_depth};
pub use session::{GameMode, PendingMove, Session};
pub use status::GameStatus;
pub use types::{Board, BoardParseError, GameConfig, InvalidGameConfig, Player, Square};
