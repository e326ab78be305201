//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_nxn::{Board, GameConfig, GameMode};
use tracing::{debug, info, instrument, warn};

/// Settings for an interactive game.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Marks in a row needed to win. Defaults by board size when absent.
    #[serde(default)]
    win_length: Option<usize>,

    /// Who plays O.
    #[serde(default)]
    mode: GameMode,

    /// Pause before the engine's move is applied, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,
}

fn default_board_size() -> usize {
    Board::MIN_SIZE
}

fn default_thinking_delay_ms() -> u64 {
    200
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            win_length: None,
            mode: GameMode::default(),
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            board_size = config.board_size,
            win_length = ?config.win_length,
            mode = %config.mode,
            "Config loaded"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    ///
    /// A new board size without a win length drops the configured win
    /// length so the size's default applies.
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        win_length: Option<usize>,
        mode: Option<GameMode>,
        thinking_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(size) = board_size {
            self.board_size = size;
            self.win_length = None;
        }
        if win_length.is_some() {
            self.win_length = win_length;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = thinking_delay_ms {
            self.thinking_delay_ms = delay;
        }
        self
    }

    /// Board size and win length, clamped into the playable range.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> GameConfig {
        let win_length = self
            .win_length
            .unwrap_or_else(|| GameConfig::default_win_length(self.board_size));
        let config = GameConfig::clamped(self.board_size, win_length);

        if config.board_size() != self.board_size {
            warn!(
                requested = self.board_size,
                using = config.board_size(),
                "Board size out of range, clamping"
            );
        }
        if config.win_length() != win_length {
            warn!(
                requested = win_length,
                using = config.win_length(),
                "Win length out of range, clamping"
            );
        }
        config
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
