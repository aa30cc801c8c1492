//! Game rules for the four-direction Othello variant
//!
//! This module implements the rule set:
//! - Legality and flipping (bracketed opponent runs)
//! - Move generation
//! - Terminal detection and final outcome

pub mod flips;
pub mod outcome;

// Re-exports for convenient access
pub use flips::{
    bracketed_run, execute_flips, get_flipped_positions, has_legal_move, is_legal, legal_moves,
    undo_flips,
};
pub use outcome::{is_terminal, outcome, GameOutcome};
