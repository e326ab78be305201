//! Engine-backed player.

use super::Player;
use crate::{Command, ScheduledMove};
use anyhow::Result;
use std::time::Duration;
use strictly_nxn::Session;
use tracing::{debug, instrument};

/// Plays the engine's move after a short thinking delay.
pub struct AutomatedPlayer {
    name: String,
    delay: Duration,
}

impl AutomatedPlayer {
    /// Creates a new automated player.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for AutomatedPlayer {
    #[instrument(skip(self, session), fields(player = %self.name, version = session.version()))]
    async fn next_command(&mut self, session: &Session) -> Result<Command> {
        let Some(pending) = session.automated_move() else {
            anyhow::bail!("Engine asked to move out of turn");
        };
        debug!(position = %pending.position(), "Engine chose move");

        let scheduled = ScheduledMove::spawn(pending, self.delay);
        match scheduled.wait().await {
            Some(pending) => Ok(Command::Scheduled(pending)),
            None => anyhow::bail!("Engine move was cancelled"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
