//! Depth-limited minimax AI with alpha-beta pruning
//!
//! Every explored placement is made on a fresh clone of the parent board,
//! so sibling branches never share state.

use crate::board::{Board, Move, Player};
use crate::error::SearchError;
use crate::eval::{evaluate, EvalWeights, Score};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u32 = 3;

// ============================================================================
// TYPES
// ============================================================================

/// Whose turn it is inside the search tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The AI is to move
    Maximizing,
    /// The opponent is to move
    Minimizing,
}

impl Role {
    pub fn opposite(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// The player who places a stone in this role
    pub fn mover(self, ai: Player) -> Player {
        match self {
            Role::Maximizing => ai,
            Role::Minimizing => ai.opponent(),
        }
    }
}

/// Outcome of a root search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Chosen move; `None` only when the board is full
    pub best_move: Option<Move>,
    /// Score backing the choice
    pub score: Score,
    /// Positions visited
    pub nodes: u64,
}

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Minimax player with alpha-beta pruning
#[derive(Clone, Debug)]
pub struct MinimaxAI {
    pub player: Player,
    pub depth: u32,
    pub weights: EvalWeights,
    nodes: u64,
}

impl MinimaxAI {
    pub fn new(player: Player, depth: u32) -> Self {
        Self::with_weights(player, depth, EvalWeights::default())
    }

    pub fn with_weights(player: Player, depth: u32, weights: EvalWeights) -> Self {
        Self {
            player,
            depth,
            weights,
            nodes: 0,
        }
    }

    /// Get best move for current position
    pub fn best_move(&mut self, board: &Board) -> Result<Option<Move>, SearchError> {
        Ok(self.search(board)?.best_move)
    }

    /// Evaluate a position from this player's side
    pub fn evaluate(&self, board: &Board) -> Score {
        evaluate(board, self.player, &self.weights)
    }

    /// Root search.
    ///
    /// Only a root score strictly above the running alpha replaces the best
    /// move. If nothing beats the initial bound the first empty cell is
    /// played. A depth of 0 is searched as depth 1.
    pub fn search(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        let moves = board.possible_moves();
        let child_depth = self.depth.saturating_sub(1);

        let mut alpha = Score::Loss;
        let beta = Score::Ceiling;
        let mut best_move = None;

        for &mv in &moves {
            let child = play(board, mv, self.player)?;
            let score = self.minimax(&child, child_depth, alpha, beta, Role::Minimizing)?;
            tracing::debug!("root move {} scored {}", mv, score);

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }
        }

        let best_move = best_move.or_else(|| moves.first().copied());
        tracing::debug!(
            "{} searched {} nodes at depth {}: {:?} ({})",
            self.player,
            self.nodes,
            self.depth,
            best_move,
            alpha
        );

        Ok(SearchResult {
            best_move,
            score: alpha,
            nodes: self.nodes,
        })
    }

    /// Alpha-beta minimax from the AI's perspective
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        role: Role,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;

        if board.is_connected(self.player) {
            return Ok(Score::WIN);
        }
        if board.is_connected(self.player.opponent()) {
            return Ok(Score::Loss);
        }
        if depth == 0 {
            return Ok(self.evaluate(board));
        }

        let moves = board.possible_moves();
        if moves.is_empty() {
            return Ok(Score::Value(0.0));
        }

        let mover = role.mover(self.player);
        let mut best = match role {
            Role::Maximizing => Score::Loss,
            Role::Minimizing => Score::Ceiling,
        };

        for mv in moves {
            let child = play(board, mv, mover)?;
            let score = self.minimax(&child, depth - 1, alpha, beta, role.opposite())?;

            match role {
                Role::Maximizing => {
                    best = best.max(score);
                    alpha = alpha.max(score);
                }
                Role::Minimizing => {
                    best = best.min(score);
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Clone the board and place a generated move on the copy
fn play(board: &Board, mv: Move, player: Player) -> Result<Board, SearchError> {
    let mut child = board.clone();
    if child.place(mv.row, mv.col, player)? {
        Ok(child)
    } else {
        Err(SearchError::IllegalMove(mv))
    }
}

// ============================================================================
// TESTS
// ============================================================================
