//! Minimax with alpha-beta pruning and iterative deepening
//!
//! This module implements the core search of the Othello agent.
//!
//! # Features
//!
//! - Iterative deepening from depth 1 up to the configured limit
//! - Alpha-beta pruning, cutting siblings once `alpha >= beta`
//! - Wall-clock budget checked between iterations only, so the first
//!   iteration always runs to completion
//! - Every child is searched on its own clone of the board
//!
//! Moves are tried in row-major generation order and ties keep the earliest
//! move, which makes the search fully deterministic.
//!
//! # Example
//!
//! ```
//! use othello::board::Board;
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Pos, Side, TOTAL_CELLS};

/// Bound above any reachable disk difference
const INF: i32 = TOTAL_CELLS as i32 + 1;

/// Strictly past the budget; landing exactly on it still allows another depth
#[inline]
fn budget_exceeded(elapsed: Duration, budget: Duration) -> bool {
    elapsed > budget
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Static evaluations at depth 0, terminal or blocked nodes
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move from the deepest iteration that produced one
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side's perspective
    pub score: i32,
    /// Depth of the iteration that produced `best_move`
    pub depth: i8,
    /// Total nodes visited over all iterations
    pub nodes: u64,
    pub stats: SearchStats,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Iterative deepening alpha-beta searcher.
///
/// Holds only per-search counters; positions are never cached between
/// iterations or between calls.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search every depth from 1 to `max_depth` with no time limit.
    #[must_use]
    pub fn search(&mut self, board: &Board, max_depth: i8) -> SearchResult {
        self.run(board, max_depth, None)
    }

    /// Iterative deepening under a wall-clock budget.
    ///
    /// The budget is checked before each iteration after the first. An
    /// iteration in progress is never interrupted, so a deep iteration can
    /// overrun the budget.
    #[must_use]
    pub fn search_timed(
        &mut self,
        board: &Board,
        max_depth: i8,
        time_budget: Duration,
    ) -> SearchResult {
        self.run(board, max_depth, Some(time_budget))
    }

    fn run(&mut self, board: &Board, max_depth: i8, time_budget: Option<Duration>) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();

        let side = board.side_to_move();
        let mut best_result = SearchResult::empty();

        for depth in 1..=max_depth {
            if depth > 1 {
                if let Some(budget) = time_budget {
                    if budget_exceeded(start.elapsed(), budget) {
                        debug!(depth, elapsed_ms = start.elapsed().as_millis() as u64, "time budget spent");
                        break;
                    }
                }
            }

            let (score, best_move) = self.alpha_beta(board, side, depth, -INF, INF, true);
            debug!(depth, score, ?best_move, nodes = self.nodes, "iteration complete");

            if let Some(pos) = best_move {
                best_result.best_move = Some(pos);
                best_result.score = score;
                best_result.depth = depth;
            }
        }

        best_result.nodes = self.nodes;
        best_result.stats = self.stats.clone();
        best_result
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Scores are always from `side`'s point of view; `maximizing` is true on
    /// plies where `side` is to move.
    fn alpha_beta(
        &mut self,
        board: &Board,
        side: Side,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth <= 0 || board.is_terminal() {
            self.stats.leaves += 1;
            return (board.score_for(side), None);
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            // Side to move must pass; evaluate here rather than search the pass
            self.stats.leaves += 1;
            return (board.score_for(side), None);
        }

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let mut child = board.clone();
            child.apply_move(mov);

            let (score, _) = self.alpha_beta(&child, side, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(depth, ?mov, alpha, beta, "cutoff");
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning, for cross-checking.
    fn reference_minimax(board: &Board, side: Side, depth: i8, maximizing: bool) -> (i32, Option<Pos>) {
        if depth <= 0 || board.is_terminal() {
            return (board.score_for(side), None);
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return (board.score_for(side), None);
        }
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;
        for mov in moves {
            let mut child = board.clone();
            child.apply_move(mov);
            let (score, _) = reference_minimax(&child, side, depth - 1, !maximizing);
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
                best_move = Some(mov);
            }
        }
        (best, best_move)
    }

    fn midgame_board() -> Board {
        let mut board = Board::new();
        for pos in [Pos::new(2, 3), Pos::new(2, 4), Pos::new(2, 5), Pos::new(4, 2)] {
            assert!(board.is_legal(pos));
            board.apply_move(pos);
        }
        board
    }

    #[test]
    fn test_depth_one_initial_takes_first_of_equal_moves() {
        let mut searcher = Searcher::new();
        let result = searcher.search(&Board::new(), 1);
        // Every opening move ends 4-1, so the first one generated wins the tie
        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
        assert_eq!(result.score, 3);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_single_legal_move_is_chosen() {
        let board = Board::from_rows(
            [
                ".OX.....",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            Side::Dark,
        );
        assert_eq!(board.legal_moves(), vec![Pos::new(0, 0)]);

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 1);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_prefers_larger_capture() {
        let board = Board::from_rows(
            [
                ".OX.....",
                "........",
                "........",
                "........",
                "........",
                ".OOOX...",
                "........",
                "........",
            ],
            Side::Dark,
        );
        assert_eq!(board.legal_moves(), vec![Pos::new(0, 0), Pos::new(5, 0)]);

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 1);
        assert_eq!(result.best_move, Some(Pos::new(5, 0)));
        // 6 Dark vs 1 Light after flipping three
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_light_searches_from_its_own_perspective() {
        let mut board = Board::new();
        board.apply_move(Pos::new(2, 3));

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 1);
        let best = result.best_move.unwrap();
        assert!(board.is_legal(best));
        // Any Light reply ends 3-3 from Light's side
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        let mut searcher = Searcher::new();
        for board in [Board::new(), midgame_board()] {
            let side = board.side_to_move();
            for depth in 1..=4 {
                let expected = reference_minimax(&board, side, depth, true);
                let got = searcher.alpha_beta(&board, side, depth, -INF, INF, true);
                assert_eq!(got, expected, "depth {}", depth);
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = midgame_board();
        let mut searcher = Searcher::new();
        let first = searcher.search(&board, 4);
        let second = searcher.search(&board, 4);
        assert_eq!(first, second);
        assert!(first.best_move.is_some());
    }

    #[test]
    fn test_zero_budget_still_returns_depth_one() {
        let mut searcher = Searcher::new();
        let result = searcher.search_timed(&Board::new(), 5, Duration::ZERO);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
    }

    #[test]
    fn test_budget_must_be_strictly_exceeded() {
        let budget = Duration::from_secs(3);
        assert!(!budget_exceeded(Duration::from_secs(2), budget));
        assert!(!budget_exceeded(budget, budget));
        assert!(budget_exceeded(budget + Duration::from_nanos(1), budget));
    }

    #[test]
    fn test_generous_budget_reaches_max_depth() {
        let mut searcher = Searcher::new();
        let timed = searcher.search_timed(&midgame_board(), 3, Duration::from_secs(600));
        let untimed = searcher.search(&midgame_board(), 3);
        assert_eq!(timed.depth, 3);
        assert_eq!(timed, untimed);
    }

    #[test]
    fn test_non_positive_depth_returns_none() {
        let mut searcher = Searcher::new();
        let board = Board::new();
        assert_eq!(searcher.search(&board, 0).best_move, None);
        assert_eq!(searcher.search(&board, -3).best_move, None);
        assert_eq!(searcher.nodes(), 0);
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let board = Board::from_rows(
            [
                "OX......",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            Side::Dark,
        );
        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 3);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = midgame_board();
        let before = board.clone();
        let mut searcher = Searcher::new();
        let _ = searcher.search(&board, 4);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_takes_cutoffs() {
        let board = midgame_board();
        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 4);
        assert!(result.stats.cutoffs > 0);
        assert_eq!(result.nodes, searcher.nodes());
    }
}
