//! HEXPLAY Core - Hex board engine and AI
//!
//! This crate provides the core logic for playing Hex against the computer:
//! - Board state (N x N rhombus with hex adjacency, win detection)
//! - Connectivity analysis (components, shortest-path cost estimation)
//! - Position evaluation (connection distance plus center control)
//! - Depth-limited minimax AI with alpha-beta pruning
//! - Agents (human pass-through and search-backed)

pub mod error;
pub mod board;
pub mod connectivity;
pub mod eval;
pub mod search;
pub mod agent;
pub mod game;
pub mod config;

// Re-exports for convenient access
pub use error::{AgentError, BoardError, ConfigError, GameError, SearchError};
pub use board::{Board, Cell, Move, ParseMoveError, Player, DIRECTIONS, MIN_BOARD_SIZE};
pub use connectivity::{connected_components, estimate_cost, Component};
pub use eval::{center_control, evaluate, EvalWeights, Score};
pub use search::{MinimaxAI, Role, SearchResult, DEFAULT_DEPTH};
pub use agent::{Agent, HumanAgent, SearchAgent};
pub use game::{Game, GameResult};
pub use config::GameConfig;
