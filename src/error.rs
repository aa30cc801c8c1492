//! Error types for board operations

/// Errors that can occur when applying moves
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Target cell is occupied or brackets no opponent run
    #[error("Illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
