//! Command-line interface for strictly_nxn.

use clap::{Parser, Subcommand};
use strictly_nxn::{GameMode, Player};

/// Strictly N×N - tic-tac-toe on boards up to 10×10
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "N×N tic-tac-toe with an alpha-beta opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board size (3-10)
        #[arg(short, long)]
        size: Option<usize>,

        /// Marks in a row needed to win (3-size)
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Who plays O: human or automated
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Engine thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Rows separated by '/', using X, O and '.'
        #[arg(short, long)]
        board: String,

        /// Mark to move (defaults to whoever is due)
        #[arg(short, long)]
        player: Option<Player>,

        /// Marks in a row needed to win
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "strictly_nxn",
            "play",
            "--size",
            "6",
            "-k",
            "5",
            "--mode",
            "human",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                size,
                win_length,
                mode,
                ..
            } => {
                assert_eq!(size, Some(6));
                assert_eq!(win_length, Some(5));
                assert_eq!(mode, Some(GameMode::HumanVsHuman));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::try_parse_from(["strictly_nxn", "suggest", "--board", "X../.../...", "-p", "o"])
            .unwrap();
        match cli.command {
            Command::Suggest { board, player, json, .. } => {
                assert_eq!(board, "X../.../...");
                assert_eq!(player, Some(Player::O));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
