//! Human player reading commands line by line.

use super::Player;
use crate::Command;
use anyhow::Result;
use strictly_nxn::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

/// Human player typing at a prompt.
///
/// Generic over the reader so tests can script input.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Reads one line. End of input is treated as `quit`.
    #[instrument(skip(self, _session), fields(player = %self.name))]
    async fn next_command(&mut self, _session: &Session) -> Result<Command> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            debug!("Input closed");
            return Ok(Command::Quit);
        }
        let command = Command::from_line(&line);
        debug!(?command, "Read command");
        Ok(command)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
