//! Search module for the Othello agent
//!
//! Contains:
//! - Minimax with alpha-beta pruning
//! - Iterative deepening under a wall-clock budget

pub mod minimax;

pub use minimax::{SearchResult, SearchStats, Searcher};
