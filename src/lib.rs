//! Strictly N×N - terminal front end for the `strictly_nxn` engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Players**: humans typing at a prompt, the engine behind a thinking delay
//! - **Orchestrator**: runs the session and reports [`GameEvent`]s
//! - **Suggest**: one-shot engine answers for a given board
//!
//! # Example
//!
//! ```no_run
//! use strictly_nxn_cli::{AppConfig, AutomatedPlayer, HumanPlayer, Orchestrator};
//! use strictly_nxn::Session;
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default();
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut orchestrator = Orchestrator::new(
//!     Session::new(config.game_config(), *config.mode()),
//!     Box::new(HumanPlayer::new("You", BufReader::new(tokio::io::stdin()))),
//!     Box::new(AutomatedPlayer::new("Engine", config.thinking_delay())),
//!     tx,
//! );
//! orchestrator.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod orchestrator;
mod pacing;
mod players;
mod render;
mod suggest;

pub use command::{Command, CommandParseError, HELP};
pub use config::{AppConfig, ConfigError};
pub use orchestrator::{GameEvent, Orchestrator};
pub use pacing::ScheduledMove;
pub use players::{AutomatedPlayer, HumanPlayer, Player};
pub use render::render;
pub use suggest::{Suggestion, suggest};
