//! Player trait and implementations.

mod automated;
mod human;

pub use automated::AutomatedPlayer;
pub use human::HumanPlayer;

use crate::Command;
use anyhow::Result;
use strictly_nxn::Session;

/// Source of commands for the game loop.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for this player's next command.
    async fn next_command(&mut self, session: &Session) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
