//! Plain-text rendering of game events.

use crate::command::HELP;
use crate::GameEvent;
use strictly_nxn::GameStatus;

/// Text to print for an event.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::Started { config, mode } => format!(
            "New game: {n}×{n}, {k} in a row, {mode}",
            n = config.board_size(),
            k = config.win_length(),
        ),
        GameEvent::BoardChanged {
            board,
            to_move,
            status,
        } => match status {
            GameStatus::InProgress => format!("{board}\n{to_move} to move"),
            _ => format!("{board}"),
        },
        GameEvent::Thinking { player } => format!("{player} is thinking..."),
        GameEvent::MoveMade(action) => action.to_string(),
        GameEvent::MoveRejected(error) => format!("Rejected: {error}"),
        GameEvent::GameOver { status, score } => format!("{status}. Score: {score}"),
        GameEvent::Undone { undone: true } => "Move undone".to_string(),
        GameEvent::Undone { undone: false } => "Nothing to undo".to_string(),
        GameEvent::ModeChanged(mode) => format!("Mode: {mode}"),
        GameEvent::WinLengthChanged {
            win_length,
            accepted: true,
            ..
        } => format!("Win length is now {win_length}"),
        GameEvent::WinLengthChanged {
            win_length,
            accepted: false,
            allowed,
        } => format!(
            "Win length {win_length} does not fit this board (choose {} to {})",
            allowed.start(),
            allowed.end()
        ),
        GameEvent::Score(score) => format!("Score: {score}"),
        GameEvent::ScoreReset => "Score cleared".to_string(),
        GameEvent::Help => HELP.to_string(),
        GameEvent::Invalid { input, reason } => format!("{reason} ({input:?}). Type `help`."),
        GameEvent::Quit => "Bye".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_nxn::{Board, GameConfig, GameMode, Player, Score};

    #[test]
    fn test_started() {
        let event = GameEvent::Started {
            config: GameConfig::new(5, 4).unwrap(),
            mode: GameMode::HumanVsAutomated,
        };
        assert_eq!(render(&event), "New game: 5×5, 4 in a row, automated");
    }

    #[test]
    fn test_board_prompt_only_while_playing() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let live = GameEvent::BoardChanged {
            board: board.clone(),
            to_move: Player::O,
            status: GameStatus::InProgress,
        };
        assert!(render(&live).ends_with("O to move"));

        let over = GameEvent::BoardChanged {
            board,
            to_move: Player::O,
            status: GameStatus::Won(Player::X),
        };
        assert!(!render(&over).contains("to move"));
    }

    #[test]
    fn test_rejected_win_length_lists_choices() {
        let event = GameEvent::WinLengthChanged {
            win_length: 9,
            accepted: false,
            allowed: GameConfig::new(6, 4).unwrap().available_win_lengths(),
        };
        assert_eq!(
            render(&event),
            "Win length 9 does not fit this board (choose 3 to 6)"
        );
    }

    #[test]
    fn test_game_over_shows_score() {
        let mut score = Score::new();
        score.record(GameStatus::Drawn);
        let text = render(&GameEvent::GameOver {
            status: GameStatus::Drawn,
            score,
        });
        assert_eq!(text, "Draw. Score: X 0 / O 0 / draws 1 (1 games)");
    }
}
