//! Game session: the live board, turn order and result

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::error::{BoardError, GameError};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Player),
}

/// A game in progress
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<(Player, Move)>,
    result: GameResult,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(size: usize, first: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: first,
            history: Vec::new(),
            result: GameResult::Ongoing,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    /// Place a stone for the side to move and pass the turn
    pub fn apply(&mut self, mv: Move) -> Result<GameResult, GameError> {
        if self.result != GameResult::Ongoing {
            return Err(GameError::GameOver);
        }

        let player = self.to_move;
        if !self.board.place(mv.row, mv.col, player)? {
            return Err(GameError::Occupied(mv));
        }
        self.history.push((player, mv));

        if self.board.is_connected(player) {
            self.result = GameResult::Won(player);
        } else {
            self.to_move = player.opponent();
        }
        Ok(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(3, Player::Red).unwrap();
        assert_eq!(game.apply(Move::new(0, 0)), Ok(GameResult::Ongoing));
        assert_eq!(game.current_player(), Player::Blue);
        assert_eq!(game.apply(Move::new(0, 1)), Ok(GameResult::Ongoing));
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_rejected_moves_keep_turn() {
        let mut game = Game::new(3, Player::Red).unwrap();
        game.apply(Move::new(1, 1)).unwrap();
        assert_eq!(game.apply(Move::new(1, 1)), Err(GameError::Occupied(Move::new(1, 1))));
        assert!(matches!(game.apply(Move::new(5, 0)), Err(GameError::Board(_))));
        assert_eq!(game.current_player(), Player::Blue);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(3, Player::Red).unwrap();
        for mv in [(1, 0), (0, 0), (1, 1), (0, 1)] {
            game.apply(Move::new(mv.0, mv.1)).unwrap();
        }
        assert_eq!(game.apply(Move::new(1, 2)), Ok(GameResult::Won(Player::Red)));
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.apply(Move::new(2, 2)), Err(GameError::GameOver));
    }
}
