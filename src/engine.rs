//! Main AI engine: the configured search agent
//!
//! This module wraps the [`Searcher`] with the settings fixed when the agent
//! is created:
//!
//! 1. **Depth limit**: derived from a [`Difficulty`] tier
//! 2. **Time budget**: checked between iterative deepening iterations
//!
//! The engine never mutates the board it is given. The caller applies the
//! returned move to its live board.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Difficulty};
//!
//! let mut engine = AIEngine::from_difficulty(Difficulty::Medium);
//! let mut board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board);
//! if let Some(pos) = result.best_move {
//!     board.apply_move(pos);
//! }
//! println!("Depth: {}, time: {}ms", result.depth, result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{Board, Pos};
use crate::config::{AgentConfig, Difficulty};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Disk difference the search expects, from the mover's perspective
    pub score: i32,
    /// Deepest iteration that produced the move
    pub depth: i8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Time-bounded game-playing agent.
///
/// Runs iterative deepening alpha-beta on the caller's thread and returns
/// the move of the deepest iteration completed before the time budget ran
/// out.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    config: AgentConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration (Easy, 3 s budget).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    #[must_use]
    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(AgentConfig::from_difficulty(difficulty))
    }

    /// Create an engine from a raw depth limit and budget in milliseconds.
    #[must_use]
    pub fn with_limits(depth_limit: i8, time_budget_ms: u64) -> Self {
        Self::with_config(AgentConfig::new(
            depth_limit,
            Duration::from_millis(time_budget_ms),
        ))
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Best move for the side to move, or `None` if it has no legal move.
    ///
    /// Also `None` when the depth limit is zero or negative.
    #[must_use]
    pub fn select_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Search the position and report the move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let side = board.side_to_move();

        let result =
            self.searcher
                .search_timed(board, self.config.depth_limit, self.config.time_budget);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        match result.best_move {
            Some(pos) => info!(
                %side,
                %pos,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "agent selected move"
            ),
            None => warn!(%side, depth_limit = self.config.depth_limit, "agent found no move"),
        }

        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn test_easy_engine_opening() {
        let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
        let result = engine.get_move_with_stats(&Board::new());
        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
        assert_eq!(result.depth, 1);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_select_move_is_legal_at_every_tier() {
        for difficulty in Difficulty::ALL {
            let mut engine = AIEngine::with_config(
                AgentConfig::from_difficulty(difficulty).with_time_budget(Duration::from_secs(600)),
            );
            let board = Board::new();
            let pos = engine.select_move(&board).unwrap();
            assert!(board.is_legal(pos));
        }
    }

    #[test]
    fn test_engine_reports_its_limits() {
        let engine = AIEngine::with_limits(4, 1_500);
        assert_eq!(engine.config().depth_limit, 4);
        assert_eq!(engine.config().time_budget, Duration::from_millis(1_500));
        assert_eq!(*AIEngine::new().config(), AgentConfig::default());
    }

    #[test]
    fn test_select_move_deterministic() {
        let mut board = Board::new();
        board.apply_move(Pos::new(3, 2));

        let mut engine = AIEngine::with_limits(3, 600_000);
        let first = engine.select_move(&board);
        let second = engine.select_move(&board);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_expired_budget_uses_depth_one() {
        let mut engine = AIEngine::with_limits(5, 0);
        let result = engine.get_move_with_stats(&Board::new());
        assert_eq!(result.depth, 1);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_zero_depth_returns_none() {
        let mut engine = AIEngine::with_limits(0, 3_000);
        assert_eq!(engine.select_move(&Board::new()), None);

        let mut engine = AIEngine::with_limits(-1, 3_000);
        assert_eq!(engine.select_move(&Board::new()), None);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::empty(Side::Dark);
        let mut engine = AIEngine::from_difficulty(Difficulty::Hard);
        assert_eq!(engine.select_move(&board), None);
    }

    #[test]
    fn test_engine_vs_engine_finishes() {
        let mut dark = AIEngine::with_limits(2, 600_000);
        let mut light = AIEngine::with_limits(1, 600_000);
        let mut board = Board::new();

        while !board.is_terminal() {
            let engine = match board.side_to_move() {
                Side::Dark => &mut dark,
                Side::Light => &mut light,
            };
            match engine.select_move(&board) {
                Some(pos) => {
                    assert!(board.is_legal(pos));
                    board.apply_move(pos);
                }
                None => board.pass_turn(),
            }
        }

        assert!(board.outcome().is_some());
    }
}
