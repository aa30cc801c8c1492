//! Othello engine with a time-bounded search agent
//!
//! An 8x8 disk-flipping game engine and an adversarial search agent:
//! - Standard starting layout, Dark moves first
//! - A move must bracket a run of opponent disks along one of the four
//!   axis-aligned directions (diagonals do not count in this variant)
//! - A side with no legal move passes; the game ends when neither side can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, moves and undo records
//! - [`rules`]: Legality, flips, terminal detection and outcome
//! - [`search`]: Iterative deepening minimax with alpha-beta pruning
//! - [`engine`]: The configured agent (difficulty, time budget, logging)
//! - [`config`]: Difficulty tiers and agent configuration
//! - [`ui`]: egui front end that drives a game against the agent
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, Difficulty, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
//!
//! // Human plays Dark
//! assert!(board.is_legal_move(2, 3));
//! board.apply_move(Pos::new(2, 3));
//!
//! // AI responds as Light
//! if let Some(pos) = engine.select_move(&board) {
//!     board.apply_move(pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! The agent searches depth 1, 2, ... up to its depth limit, keeping the
//! move of the deepest finished iteration. The time budget is only checked
//! between iterations, so the first iteration always completes.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, MoveRecord, Pos, Side, BOARD_SIZE};
pub use config::{AgentConfig, Difficulty};
pub use engine::{AIEngine, MoveResult};
pub use error::{GameError, GameResult};
pub use rules::GameOutcome;
