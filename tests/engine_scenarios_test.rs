//! End-to-end engine behaviour through the public API.

use strictly_nxn::{
    Board, GameConfig, GameState, GameStatus, MoveError, Player, Position, Tactic, analyze,
    choose_move, rules::check_winner, rules::is_drawn,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_engine_answers_centre_with_corner() {
    let game = GameState::replay(GameConfig::default(), &[pos(1, 1)]).unwrap();
    let reply = choose_move(game.board(), Player::O, game.config()).unwrap();
    let corners = [pos(0, 0), pos(0, 2), pos(2, 0), pos(2, 2)];
    assert!(corners.contains(&reply), "expected a corner, got {}", reply);
}

#[test]
fn test_engine_blocks_three_in_a_row() {
    let board: Board = "XX./O../..O".parse().unwrap();
    let report = analyze(&board, Player::O, &GameConfig::default()).unwrap();
    assert_eq!(report.tactic, Tactic::Block);
    assert_eq!(report.position, pos(0, 2));
}

#[test]
fn test_engine_prefers_winning_to_blocking() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let report = analyze(&board, Player::O, &GameConfig::default()).unwrap();
    assert_eq!(report.tactic, Tactic::Win);
    assert_eq!(report.position, pos(1, 2));
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let moves = [
        pos(0, 0),
        pos(0, 1),
        pos(0, 2),
        pos(1, 1),
        pos(1, 0),
        pos(1, 2),
        pos(2, 1),
        pos(2, 0),
        pos(2, 2),
    ];
    let game = GameState::replay(GameConfig::default(), &moves).unwrap();
    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert!(is_drawn(game.board(), game.config()));
    assert_eq!(choose_move(game.board(), Player::O, game.config()), None);
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut game = GameState::replay(GameConfig::default(), &[pos(1, 1)]).unwrap();
    let before = game.clone();

    assert_eq!(game.apply_move(pos(1, 1)), Err(MoveError::SquareOccupied(pos(1, 1))));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_anti_diagonal_wins_at_both_edges_of_large_board() {
    let config = GameConfig::new(10, 4).unwrap();

    let lower_left = [pos(6, 3), pos(0, 0), pos(7, 2), pos(0, 2), pos(8, 1), pos(0, 4), pos(9, 0)];
    let game = GameState::replay(config, &lower_left).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    let upper_right = [pos(0, 9), pos(9, 9), pos(1, 8), pos(9, 7), pos(2, 7), pos(9, 5), pos(3, 6)];
    let game = GameState::replay(config, &upper_right).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(check_winner(game.board(), &config), Some(Player::X));
}

#[test]
fn test_moves_then_undos_restore_start() {
    let config = GameConfig::new(5, 4).unwrap();
    let moves = [pos(0, 0), pos(4, 4), pos(2, 2), pos(1, 3), pos(3, 1)];
    let mut game = GameState::replay(config, &moves).unwrap();

    for _ in 0..moves.len() {
        assert!(game.undo());
    }
    assert!(!game.undo());

    let fresh = GameState::new(config);
    assert_eq!(game.board(), fresh.board());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.history_index(), 0);
}

#[test]
fn test_undo_after_win_reopens_game() {
    let moves = [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)];
    let mut game = GameState::replay(GameConfig::default(), &moves).unwrap();
    assert!(game.is_over());

    assert!(game.undo());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);
    assert!(game.apply_move(pos(2, 2)).is_ok());
}

#[test]
fn test_move_after_undo_discards_redo_branch() {
    let mut game = GameState::replay(GameConfig::default(), &[pos(0, 0), pos(1, 1)]).unwrap();
    game.undo();
    game.apply_move(pos(2, 2)).unwrap();

    assert_eq!(game.history().len(), 3);
    assert!(game.board().is_empty(pos(1, 1)));
}

#[test]
fn test_search_is_repeatable() {
    let board: Board = "X.O../.X.../..O../...X./.....".parse().unwrap();
    let config = GameConfig::new(5, 4).unwrap();
    let first = analyze(&board, Player::O, &config);
    assert!(first.is_some());
    assert_eq!(analyze(&board, Player::O, &config), first);
}
