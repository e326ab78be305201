//! One-shot move suggestion for a board given on the command line.

use anyhow::{Context, Result};
use serde::Serialize;
use strictly_nxn::{Board, GameConfig, GameStatus, Player, SearchReport, Tactic, analyze};
use tracing::{info, instrument};

/// Engine answer for a single board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The board as given, in compact form.
    pub board: String,
    /// Mark the suggestion is for.
    pub player: Player,
    /// Board size and win length used.
    pub config: GameConfig,
    /// Status of the given board.
    pub status: GameStatus,
    /// Chosen move, absent when the game is already over.
    pub report: Option<SearchReport>,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.report {
            None => write!(f, "No move: {}", self.status),
            Some(report) => {
                let how = match report.tactic {
                    Tactic::Win => "wins".to_string(),
                    Tactic::Block => "blocks".to_string(),
                    Tactic::Searched { score } => {
                        format!("search depth {}, score {}, {} nodes", report.depth, score, report.nodes)
                    }
                };
                write!(f, "{} plays {} ({})", self.player, report.position, how)
            }
        }
    }
}

/// Computes the engine's move for `board`.
///
/// `player` defaults to whoever is due to move given the mark count, and
/// `win_length` to the board size's default.
#[instrument]
pub fn suggest(board: &str, player: Option<Player>, win_length: Option<usize>) -> Result<Suggestion> {
    let board: Board = board.parse().context("Invalid board")?;
    let size = board.size();
    let k = win_length.unwrap_or_else(|| GameConfig::default_win_length(size));
    let config = GameConfig::new(size, k)
        .with_context(|| format!("Win length {} does not fit a {}×{} board", k, size, size))?;
    let player = player.unwrap_or_else(|| Player::to_move_after(board.occupied()));

    let status = GameStatus::of(&board, &config);
    let report = if status.is_terminal() {
        None
    } else {
        analyze(&board, player, &config)
    };

    info!(%player, ?report, "Suggestion ready");
    Ok(Suggestion {
        board: board.to_compact(),
        player,
        config,
        status,
        report,
    })
}
