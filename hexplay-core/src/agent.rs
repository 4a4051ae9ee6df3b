//! Agents that pick moves for a side

use crate::board::{Board, Move, Player};
use crate::error::AgentError;
use crate::eval::EvalWeights;
use crate::search::{MinimaxAI, SearchResult};

/// Human player. The move is read and validated outside the core and handed
/// over with [`HumanAgent::submit`].
#[derive(Clone, Debug)]
pub struct HumanAgent {
    pub player: Player,
    pending: Option<Move>,
}

impl HumanAgent {
    pub fn new(player: Player) -> Self {
        Self { player, pending: None }
    }

    /// Queue the next move
    pub fn submit(&mut self, mv: Move) {
        self.pending = Some(mv);
    }

    /// Hand back the queued move unchanged
    pub fn choose_move(&mut self) -> Result<Move, AgentError> {
        self.pending.take().ok_or(AgentError::NoMoveSubmitted)
    }
}

/// Computer player backed by alpha-beta search
#[derive(Clone, Debug)]
pub struct SearchAgent {
    ai: MinimaxAI,
    last: Option<SearchResult>,
}

impl SearchAgent {
    pub fn new(player: Player, depth: u32, weights: EvalWeights) -> Self {
        Self {
            ai: MinimaxAI::with_weights(player, depth, weights),
            last: None,
        }
    }

    pub fn player(&self) -> Player {
        self.ai.player
    }

    /// Result of the most recent search
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    pub fn choose_move(&mut self, board: &Board) -> Result<Move, AgentError> {
        let result = self.ai.search(board)?;
        let mv = result.best_move.ok_or(AgentError::NoLegalMoves)?;
        self.last = Some(result);
        Ok(mv)
    }
}

/// Either kind of player, dispatched by variant
#[derive(Clone, Debug)]
pub enum Agent {
    Human(HumanAgent),
    Search(SearchAgent),
}

impl Agent {
    pub fn human(player: Player) -> Self {
        Agent::Human(HumanAgent::new(player))
    }

    pub fn search(player: Player, depth: u32, weights: EvalWeights) -> Self {
        Agent::Search(SearchAgent::new(player, depth, weights))
    }

    pub fn player(&self) -> Player {
        match self {
            Agent::Human(h) => h.player,
            Agent::Search(s) => s.player(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Agent::Human(_))
    }

    /// Pick the next move for this agent's side
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, AgentError> {
        match self {
            Agent::Human(h) => h.choose_move(),
            Agent::Search(s) => s.choose_move(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_passes_move_through() {
        let board = Board::new(3).unwrap();
        let mut agent = Agent::human(Player::Red);
        assert_eq!(agent.choose_move(&board), Err(AgentError::NoMoveSubmitted));

        if let Agent::Human(h) = &mut agent {
            // No validation happens here
            h.submit(Move::new(9, 9));
        }
        assert_eq!(agent.choose_move(&board), Ok(Move::new(9, 9)));
        assert_eq!(agent.choose_move(&board), Err(AgentError::NoMoveSubmitted));
    }

    #[test]
    fn test_search_agent_picks_empty_cell() {
        let mut board = Board::new(3).unwrap();
        assert!(board.place(1, 1, Player::Red).unwrap());
        let mut agent = Agent::search(Player::Blue, 2, EvalWeights::default());
        assert!(!agent.is_human());
        assert_eq!(agent.player(), Player::Blue);

        let mv = agent.choose_move(&board).unwrap();
        assert_eq!(board.cell(mv.row, mv.col).unwrap(), crate::board::Cell::Empty);

        if let Agent::Search(s) = &agent {
            let last = s.last_search().unwrap();
            assert_eq!(last.best_move, Some(mv));
            assert!(last.nodes > 0);
        }
    }

    #[test]
    fn test_search_agent_on_full_board() {
        let mut board = Board::new(2).unwrap();
        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(board.place(r, c, Player::Red).unwrap());
        }
        let mut agent = SearchAgent::new(Player::Blue, 1, EvalWeights::default());
        assert_eq!(agent.choose_move(&board), Err(AgentError::NoLegalMoves));
    }
}
