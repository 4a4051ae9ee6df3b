//! Connectivity analysis used by the evaluator
//!
//! Groups a player's stones into connected components and estimates how far
//! the player is from joining their edges.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, Move, Player};

/// A maximal group of same-owner stones
pub type Component = FxHashSet<Move>;

/// Partition the player's stones into connected components
pub fn connected_components(board: &Board, player: Player) -> Vec<Component> {
    let mut visited: FxHashSet<Move> = FxHashSet::default();
    let mut components = Vec::new();

    for origin in board.coords() {
        if !board.is_owned_by(origin, player) || visited.contains(&origin) {
            continue;
        }

        let mut component = Component::default();
        let mut stack = vec![origin];
        while let Some(mv) = stack.pop() {
            if !visited.insert(mv) {
                continue;
            }
            component.insert(mv);
            stack.extend(
                mv.neighbors(board.size())
                    .filter(|&n| board.is_owned_by(n, player) && !visited.contains(&n)),
            );
        }
        components.push(component);
    }

    components
}

/// Lower-is-better estimate of how many steps the player is from connecting.
///
/// Searches from every component anchored on the starting edge, or from the
/// whole starting edge when no component is anchored there. Unreachable
/// targets cost the board size.
pub fn estimate_cost(board: &Board, player: Player) -> usize {
    let anchored: Vec<Component> = connected_components(board, player)
        .into_iter()
        .filter(|c| c.iter().any(|&mv| player.on_start_edge(mv)))
        .collect();

    if anchored.is_empty() {
        let edge: Vec<Move> = player.start_edge(board.size()).collect();
        return shortest_path(board, &edge, player);
    }

    anchored
        .iter()
        .map(|component| {
            let seeds: Vec<Move> = component.iter().copied().collect();
            shortest_path(board, &seeds, player)
        })
        .min()
        .unwrap_or(board.size())
}

/// Breadth-first distance from `seeds` to the player's target edge through
/// cells the opponent does not hold.
///
/// Seeds the player already owns start at distance 0; empty seeds still have
/// to be claimed and start at 1. Opponent seeds are skipped. Returns the board
/// size when the target edge cannot be reached.
fn shortest_path(board: &Board, seeds: &[Move], player: Player) -> usize {
    let size = board.size();
    let blocked = Cell::Owned(player.opponent());

    let (owned, empty): (Vec<Move>, Vec<Move>) = seeds
        .iter()
        .copied()
        .filter(|&mv| board.at(mv) != blocked)
        .partition(|&mv| board.is_owned_by(mv, player));

    // Owned seeds go first so the queue stays ordered by distance
    let mut queue: VecDeque<(Move, usize)> = owned
        .into_iter()
        .map(|mv| (mv, 0))
        .chain(empty.into_iter().map(|mv| (mv, 1)))
        .collect();
    let mut visited: FxHashSet<Move> = queue.iter().map(|&(mv, _)| mv).collect();

    while let Some((mv, dist)) = queue.pop_front() {
        if player.on_target_edge(mv, size) {
            return dist;
        }
        for next in mv.neighbors(size) {
            if board.at(next) != blocked && visited.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }

    size
}
