//! Delayed delivery of engine moves.
//!
//! The engine answers instantly; the pause before its move lands is purely
//! cosmetic. A [`ScheduledMove`] holds the computed move in a timer task
//! that is aborted when the schedule is dropped. Delivery does
//! not apply the move: the session still checks the version the move was
//! computed for.

use std::time::Duration;
use strictly_nxn::PendingMove;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

/// An engine move waiting out its thinking delay.
#[derive(Debug)]
pub struct ScheduledMove {
    handle: JoinHandle<PendingMove>,
}

impl ScheduledMove {
    /// Starts the timer for `pending`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(pending), fields(position = %pending.position(), version = pending.version))]
    pub fn spawn(pending: PendingMove, delay: Duration) -> Self {
        debug!(?delay, "Scheduling engine move");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!("Thinking delay elapsed");
            pending
        });
        Self { handle }
    }

    /// Waits for the delay and yields the move, or `None` if the timer was
    /// aborted.
    pub async fn wait(mut self) -> Option<PendingMove> {
        (&mut self.handle).await.ok()
    }
}

impl Drop for ScheduledMove {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
