//! GUI module for the Othello game
//!
//! This module provides a native Rust GUI using egui/eframe. It only talks to
//! the engine through the public board and agent operations.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::{AppSettings, OthelloApp};
pub use game_state::{GameMode, GameState, Turn};
