//! Move selection for the automated player.
//!
//! Tactics first (win now, then block now), then a depth-limited minimax
//! with alpha-beta pruning. The search is a pure function of the board,
//! the mover and the config.

use super::eval::evaluate;
use super::rules::{check_winner, is_full, legal_moves};
use super::{Board, GameConfig, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a won terminal node, before the depth adjustment.
pub const WIN_SCORE: i64 = 1000;

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tactic {
    /// The move wins immediately.
    Win,
    /// The move stops an immediate opponent win.
    Block,
    /// The move came out of the minimax search with this score.
    Searched {
        /// Minimax value of the move.
        score: i64,
    },
}

/// The chosen move and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move.
    pub position: Position,
    /// Stage that decided the move.
    pub tactic: Tactic,
    /// Depth cap used by the search stage.
    pub depth: usize,
    /// Positions visited by the search stage (zero for tactics).
    pub nodes: u64,
}

/// Search depth for a board size: shallower on larger boards.
pub fn search_depth(board_size: usize) -> usize {
    let size = i64::try_from(board_size).unwrap_or(i64::MAX);
    // Clamped into 2..=4, so the cast back is lossless.
    6i64.saturating_sub(size).clamp(2, 4) as usize
}

/// Chooses a move for `player`, or `None` if the board is full.
pub fn choose_move(board: &Board, player: Player, config: &GameConfig) -> Option<Position> {
    analyze(board, player, config).map(|report| report.position)
}

/// Chooses a move for `player` and reports how it was found.
#[instrument(skip(board), fields(size = board.size(), win_length = config.win_length()))]
pub fn analyze(board: &Board, player: Player, config: &GameConfig) -> Option<SearchReport> {
    let moves = legal_moves(board);
    let first = *moves.first()?;
    let depth = search_depth(config.board_size());

    if let Some(position) = first_winning(board, &moves, player, config) {
        debug!(%position, "Playing immediate win");
        return Some(SearchReport {
            position,
            tactic: Tactic::Win,
            depth,
            nodes: 0,
        });
    }

    if let Some(position) = first_winning(board, &moves, player.opponent(), config) {
        debug!(%position, "Blocking opponent win");
        return Some(SearchReport {
            position,
            tactic: Tactic::Block,
            depth,
            nodes: 0,
        });
    }

    let minimax = Minimax {
        player,
        config,
        max_depth: depth,
    };

    let mut best = (first, i64::MIN);
    let mut nodes = 0;
    for position in moves {
        let Ok(child) = board.with_mark(position, player) else {
            continue;
        };
        let (score, visited) = minimax.score(child, 1, false, i64::MIN, i64::MAX);
        nodes += visited;
        trace!(%position, score, "Scored candidate");

        // Strictly greater: ties keep the earliest move in row-major order.
        if score > best.1 {
            best = (position, score);
        }
    }

    let (position, score) = best;
    debug!(%position, score, depth, nodes, "Search chose move");
    Some(SearchReport {
        position,
        tactic: Tactic::Searched { score },
        depth,
        nodes,
    })
}

/// First move (row-major) after which `mover` has a winning line.
fn first_winning(
    board: &Board,
    moves: &[Position],
    mover: Player,
    config: &GameConfig,
) -> Option<Position> {
    moves.iter().copied().find(|&pos| {
        board
            .with_mark(pos, mover)
            .is_ok_and(|next| check_winner(&next, config) == Some(mover))
    })
}

/// Fixed search parameters shared by every node.
struct Minimax<'a> {
    player: Player,
    config: &'a GameConfig,
    max_depth: usize,
}

impl Minimax<'_> {
    /// Minimax value of `board` and the number of nodes visited.
    ///
    /// `board` is owned by this call; children are fresh copies.
    fn score(
        &self,
        board: Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> (i64, u64) {
        let plies = i64::try_from(depth).unwrap_or(WIN_SCORE);
        match check_winner(&board, self.config) {
            Some(winner) if winner == self.player => return (WIN_SCORE - plies, 1),
            Some(_) => return (plies - WIN_SCORE, 1),
            None => {}
        }
        if is_full(&board) {
            return (0, 1);
        }
        if depth >= self.max_depth {
            return (evaluate(&board, self.config, self.player), 1);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        let mut nodes = 1;

        for pos in legal_moves(&board) {
            let Ok(child) = board.with_mark(pos, mover) else {
                continue;
            };
            let (score, visited) = self.score(child, depth + 1, !maximizing, alpha, beta);
            nodes += visited;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        (best, nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_depth_by_size() {
        assert_eq!(search_depth(3), 3);
        assert_eq!(search_depth(4), 2);
        assert_eq!(search_depth(5), 2);
        assert_eq!(search_depth(10), 2);
        assert_eq!(search_depth(1), 4);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX/OXX/OXO");
        assert_eq!(choose_move(&b, Player::O, &GameConfig::default()), None);
    }

    #[test]
    fn test_immediate_win_beats_block() {
        let b = board("XX./OO./...");
        let report = analyze(&b, Player::O, &GameConfig::default()).unwrap();
        assert_eq!(report.position, Position::new(1, 2));
        assert_eq!(report.tactic, Tactic::Win);
    }

    #[test]
    fn test_blocks_open_line() {
        let b = board("XX./O../..O");
        let report = analyze(&b, Player::O, &GameConfig::default()).unwrap();
        assert_eq!(report.position, Position::new(0, 2));
        assert_eq!(report.tactic, Tactic::Block);
    }

    #[test]
    fn test_answers_centre_with_corner() {
        let b = board(".../.X./...");
        let report = analyze(&b, Player::O, &GameConfig::default()).unwrap();
        assert_eq!(report.position, Position::new(0, 0));
        assert!(matches!(report.tactic, Tactic::Searched { .. }));
        assert!(report.nodes > 0);
    }

    #[test]
    fn test_search_finds_fork() {
        // X on both top corners, O on the top edge and the left edge.
        let b = board("XOX/O../...");
        let report = analyze(&b, Player::X, &GameConfig::default()).unwrap();
        assert_eq!(report.position, Position::new(1, 1));
        // Win on X's next move: depth 3 from the root.
        assert_eq!(report.tactic, Tactic::Searched { score: WIN_SCORE - 3 });
    }

    #[test]
    fn test_search_is_deterministic() {
        let b = board("X..../..O../...X./...../.....");
        let config = GameConfig::new(5, 4).unwrap();
        let first = analyze(&b, Player::O, &config);
        for _ in 0..3 {
            assert_eq!(analyze(&b, Player::O, &config), first);
        }
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let b = board(".../.X./...");
        let copy = b.clone();
        choose_move(&b, Player::O, &GameConfig::default());
        assert_eq!(b, copy);
    }

    #[test]
    fn test_blocks_on_large_board() {
        let mut b = Board::new(10);
        for col in 2..5 {
            b = b.with_mark(Position::new(5, col), Player::X).unwrap();
        }
        b = b.with_mark(Position::new(0, 0), Player::O).unwrap();
        b = b.with_mark(Position::new(9, 9), Player::O).unwrap();

        let config = GameConfig::new(10, 4).unwrap();
        let report = analyze(&b, Player::O, &config).unwrap();
        assert_eq!(report.position, Position::new(5, 1));
        assert_eq!(report.tactic, Tactic::Block);
    }

    /// Exhaustive minimax with the same scoring as [`Minimax`] but no cutoffs.
    fn plain_minimax(
        board: &Board,
        player: Player,
        config: &GameConfig,
        depth: usize,
        max_depth: usize,
        maximizing: bool,
    ) -> (i64, u64) {
        let plies = depth as i64;
        match check_winner(board, config) {
            Some(winner) if winner == player => return (WIN_SCORE - plies, 1),
            Some(_) => return (plies - WIN_SCORE, 1),
            None => {}
        }
        if is_full(board) {
            return (0, 1);
        }
        if depth >= max_depth {
            return (evaluate(board, config, player), 1);
        }

        let mover = if maximizing { player } else { player.opponent() };
        let mut nodes = 1;
        let scores: Vec<i64> = legal_moves(board)
            .into_iter()
            .map(|pos| {
                let child = board.with_mark(pos, mover).unwrap();
                let (score, visited) =
                    plain_minimax(&child, player, config, depth + 1, max_depth, !maximizing);
                nodes += visited;
                score
            })
            .collect();
        let best = if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        };
        (best, nodes)
    }

    /// Root move and score chosen by exhaustive minimax, plus nodes visited.
    fn plain_choice(board: &Board, player: Player, config: &GameConfig) -> (Position, i64, u64) {
        let max_depth = search_depth(config.board_size());
        let mut best: Option<(Position, i64)> = None;
        let mut nodes = 0;
        for pos in legal_moves(board) {
            let child = board.with_mark(pos, player).unwrap();
            let (score, visited) = plain_minimax(&child, player, config, 1, max_depth, false);
            nodes += visited;
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }
        let (pos, score) = best.unwrap();
        (pos, score, nodes)
    }

    #[test]
    fn test_pruned_search_matches_exhaustive_minimax() {
        let cases = [
            (".../.X./...", Player::O, GameConfig::default()),
            ("XO./.../...", Player::X, GameConfig::default()),
            ("X.../..../..O./....", Player::X, GameConfig::new(4, 3).unwrap()),
            (
                "X..../..O../...../...../.....",
                Player::X,
                GameConfig::new(5, 4).unwrap(),
            ),
        ];

        let mut pruned_somewhere = false;
        for (text, player, config) in cases {
            let b = board(text);
            let report = analyze(&b, player, &config).unwrap();
            let (position, score, nodes) = plain_choice(&b, player, &config);

            assert_eq!(report.position, position, "board {}", text);
            assert_eq!(report.tactic, Tactic::Searched { score }, "board {}", text);
            assert!(report.nodes <= nodes, "board {}", text);
            pruned_somewhere |= report.nodes < nodes;
        }
        assert!(pruned_somewhere, "alpha-beta never cut a branch");
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_on_3x3() {
        let b = board(".../.X./...");
        let config = GameConfig::default();
        let report = analyze(&b, Player::O, &config).unwrap();
        let (_, _, exhaustive) = plain_choice(&b, Player::O, &config);
        // 238 nodes with cutoffs against 400 without.
        assert_eq!(exhaustive, 400);
        assert!(report.nodes < exhaustive);
    }

    #[test]
    fn test_chosen_move_is_legal() {
        let b = board("X.O./.X../..O./....");
        let config = GameConfig::new(4, 3).unwrap();
        let pos = choose_move(&b, Player::X, &config).unwrap();
        assert!(b.is_empty(pos));
    }
}
