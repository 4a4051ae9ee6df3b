//! Position evaluation

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Move, Player};
use crate::connectivity::estimate_cost;

/// Heuristic weights for position evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Weight on the opponent's connection cost
    pub opponent_weight: f32,
    /// Weight for center control
    pub center_weight: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            opponent_weight: 0.8,
            center_weight: 0.01,
        }
    }
}

/// Search score, ordered `Loss < Value(_) < Ceiling`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Score {
    /// The opponent has connected
    Loss,
    /// Heuristic value; a connected position scores `Value(0.0)`
    Value(f32),
    /// Upper window bound, never produced by evaluation
    Ceiling,
}

impl Score {
    /// Score of a position the AI has already won
    pub const WIN: Score = Score::Value(0.0);

    pub fn max(self, other: Score) -> Score {
        match other.partial_cmp(&self) {
            Some(Ordering::Greater) => other,
            _ => self,
        }
    }

    pub fn min(self, other: Score) -> Score {
        match other.partial_cmp(&self) {
            Some(Ordering::Less) => other,
            _ => self,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Value(v) => write!(f, "{:.3}", v),
            Score::Ceiling => write!(f, "+inf"),
        }
    }
}

/// Evaluate position from the AI's perspective
pub fn evaluate(board: &Board, ai: Player, weights: &EvalWeights) -> Score {
    if board.is_connected(ai) {
        return Score::WIN;
    }
    if board.is_connected(ai.opponent()) {
        return Score::Loss;
    }

    let d_player = estimate_cost(board, ai) as f32;
    let d_opponent = estimate_cost(board, ai.opponent()) as f32;
    let center_advantage = center_control(board, ai);

    Score::Value(
        d_player - weights.opponent_weight * d_opponent + weights.center_weight * center_advantage,
    )
}

/// Stone balance in the central square, in `[-1, 1]`.
///
/// The square has radius `size / 3` around `(size / 2, size / 2)`, clipped
/// to the board.
pub fn center_control(board: &Board, ai: Player) -> f32 {
    let size = board.size();
    let center = size / 2;
    let radius = size / 3;
    let lo = center.saturating_sub(radius);
    let hi = (center + radius + 1).min(size);

    let mut mine = 0i32;
    let mut theirs = 0i32;
    let mut total = 0i32;
    for row in lo..hi {
        for col in lo..hi {
            match board.at(Move::new(row, col)) {
                Cell::Owned(p) if p == ai => mine += 1,
                Cell::Owned(_) => theirs += 1,
                Cell::Empty => {}
            }
            total += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        (mine - theirs) as f32 / total as f32
    }
}
