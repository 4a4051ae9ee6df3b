//! Hex board geometry and state
//!
//! The board is an N x N rhombus addressed by (row, col). Red connects the
//! left edge to the right edge, Blue connects the top edge to the bottom edge.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Smallest board a game can be played on
pub const MIN_BOARD_SIZE: usize = 3;

/// Neighbor offsets (drow, dcol) on the rhombus
pub const DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1: left edge to right edge
    Red = 1,
    /// Player 2: top edge to bottom edge
    Blue = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Numeric id (1 or 2)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Does this cell lie on the edge the player starts from?
    pub fn on_start_edge(self, mv: Move) -> bool {
        match self {
            Player::Red => mv.col == 0,
            Player::Blue => mv.row == 0,
        }
    }

    /// Does this cell lie on the edge the player has to reach?
    pub fn on_target_edge(self, mv: Move, size: usize) -> bool {
        match self {
            Player::Red => mv.col + 1 == size,
            Player::Blue => mv.row + 1 == size,
        }
    }

    /// All cells of the starting edge, in row-major order
    pub fn start_edge(self, size: usize) -> impl Iterator<Item = Move> {
        (0..size).map(move |i| match self {
            Player::Red => Move::new(i, 0),
            Player::Blue => Move::new(0, i),
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate, also used as a placement move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbors that fall inside a board of the given size
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Move> {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < size && col < size).then_some(Move::new(row, col))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing "row col" text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected two numbers \"row col\", got {0:?}")]
pub struct ParseMoveError(String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let parse = |p: Option<&str>| p.and_then(|v| v.parse::<usize>().ok());

        match (parse(parts.next()), parse(parts.next()), parts.next()) {
            (Some(row), Some(col), None) => Ok(Move::new(row, col)),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Board state (clone to branch)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfRange { row, col, size: self.size })
        }
    }

    /// Contents of a cell
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Contents of a cell known to be on the board
    pub(crate) fn at(&self, mv: Move) -> Cell {
        self.cells[mv.row * self.size + mv.col]
    }

    /// Does the player own this cell?
    pub(crate) fn is_owned_by(&self, mv: Move, player: Player) -> bool {
        self.at(mv) == Cell::Owned(player)
    }

    /// Claim an empty cell. Returns `Ok(false)` and leaves the board
    /// untouched when the cell is already taken.
    #[must_use = "an occupied cell is reported as Ok(false)"]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<bool, BoardError> {
        let i = self.index(row, col)?;
        if self.cells[i].is_empty() {
            self.cells[i] = Cell::Owned(player);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// All empty cells in row-major order
    pub fn possible_moves(&self) -> Vec<Move> {
        self.coords().filter(|&mv| self.at(mv).is_empty()).collect()
    }

    /// All occupied cells in row-major order
    pub fn occupied(&self) -> Vec<Move> {
        self.coords().filter(|&mv| !self.at(mv).is_empty()).collect()
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Move> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Move::new(row, col)))
    }

    /// Has the player joined their two edges?
    pub fn is_connected(&self, player: Player) -> bool {
        let mut queue: VecDeque<Move> = player
            .start_edge(self.size)
            .filter(|&mv| self.is_owned_by(mv, player))
            .collect();
        let mut visited: FxHashSet<Move> = queue.iter().copied().collect();

        while let Some(mv) = queue.pop_front() {
            if player.on_target_edge(mv, self.size) {
                return true;
            }
            for next in mv.neighbors(self.size) {
                if self.is_owned_by(next, player) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// The first player found connected, if any
    pub fn winner(&self) -> Option<Player> {
        [Player::Red, Player::Blue]
            .into_iter()
            .find(|&p| self.is_connected(p))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:<2}", col % 100)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{}{:>2} ", " ".repeat(row), row)?;
            for col in 0..self.size {
                let glyph = match self.at(Move::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Owned(Player::Red) => 'R',
                    Cell::Owned(Player::Blue) => 'B',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(r, c, p) in stones {
            assert!(board.place(r, c, p).unwrap());
        }
        board
    }

    #[test]
    fn test_new_board_not_connected() {
        for size in 2..=7 {
            let board = Board::new(size).unwrap();
            assert!(!board.is_connected(Player::Red));
            assert!(!board.is_connected(Player::Blue));
            assert_eq!(board.winner(), None);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = board_with(3, &[(1, 1, Player::Red)]);
        let before = board.clone();
        assert_eq!(board.place(1, 1, Player::Blue), Ok(false));
        assert_eq!(board.place(1, 1, Player::Red), Ok(false));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.place(3, 0, Player::Red),
            Err(BoardError::OutOfRange { row: 3, col: 0, size: 3 })
        );
        assert!(board.cell(0, 7).is_err());
        assert_eq!(board.cell(2, 2), Ok(Cell::Empty));
    }

    #[test]
    fn test_possible_moves_row_major() {
        let board = board_with(2, &[(0, 0, Player::Red)]);
        assert_eq!(
            board.possible_moves(),
            vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 1)]
        );
        assert_eq!(board.occupied(), vec![Move::new(0, 0)]);
    }

    #[test]
    fn test_red_row_connects_on_small_board() {
        let board = board_with(2, &[(0, 0, Player::Red), (0, 1, Player::Red)]);
        assert!(board.is_connected(Player::Red));
        assert!(!board.is_connected(Player::Blue));
    }

    #[test]
    fn test_diagonal_adjacency() {
        // (0,2) -> (1,1) -> (2,0) uses the (+1,-1) direction
        let board = board_with(
            3,
            &[(0, 2, Player::Blue), (1, 1, Player::Blue), (2, 0, Player::Blue)],
        );
        assert!(board.is_connected(Player::Blue));

        // (0,0) -> (1,1) is not adjacent on the rhombus
        let board = board_with(
            3,
            &[(0, 0, Player::Blue), (1, 1, Player::Blue), (2, 2, Player::Blue)],
        );
        assert!(!board.is_connected(Player::Blue));
    }

    #[test]
    fn test_top_row_is_not_a_blue_win() {
        let board = board_with(
            3,
            &[(0, 0, Player::Blue), (0, 1, Player::Blue), (0, 2, Player::Blue)],
        );
        assert!(!board.is_connected(Player::Blue));
        assert!(!board.is_connected(Player::Red));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = board_with(3, &[(0, 0, Player::Red)]);
        let mut copy = board.clone();
        assert!(copy.place(2, 2, Player::Blue).unwrap());
        assert_eq!(board.cell(2, 2), Ok(Cell::Empty));
        assert_eq!(copy.cell(2, 2), Ok(Cell::Owned(Player::Blue)));
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let mut n: Vec<Move> = Move::new(0, 0).neighbors(3).collect();
        n.sort();
        assert_eq!(n, vec![Move::new(0, 1), Move::new(1, 0)]);
        assert_eq!(Move::new(1, 1).neighbors(3).count(), 6);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("2 3".parse::<Move>(), Ok(Move::new(2, 3)));
        assert_eq!(" 0,1 ".parse::<Move>(), Ok(Move::new(0, 1)));
        assert!("a b".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::Red.id(), 1);
        assert_eq!(Player::Blue.id(), 2);
        assert_eq!(Player::Red.opponent(), Player::Blue);
    }
}
