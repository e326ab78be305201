//! Game rules.
//!
//! Pure functions for evaluating a board under a [`GameConfig`](crate::GameConfig).
//! Rules are separated from board storage so the state machine, the
//! search and the evaluator all classify positions the same way.

pub mod draw;
pub mod lines;
pub mod moves;
pub mod win;

pub use draw::{is_drawn, is_full};
pub use lines::{Direction, Window, windows};
pub use moves::legal_moves;
pub use win::{check_winner, winning_line};
