//! Error types for the core engine

use crate::board::Move;

/// Errors raised by board access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Invalid board size: {0}")]
    InvalidSize(usize),

    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Errors raised while searching
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Generated move {0} was rejected by the board")]
    IllegalMove(Move),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised by agents when asked for a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("No move has been submitted for the human player")]
    NoMoveSubmitted,

    #[error("No legal moves remain")]
    NoLegalMoves,

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors raised while advancing a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Cell {0} is already occupied")]
    Occupied(Move),

    #[error("The game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size must be at least {min}, got {size}")]
    BoardTooSmall { size: usize, min: usize },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
