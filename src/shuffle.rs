//! # Shuffle Module
//!
//! Start configurations are generated by scrambling a solved board with
//! random legal moves, so every generated puzzle is reachable from the
//! solved layout by construction. Scrambling a random *permutation* instead
//! would produce an unreachable board half the time.

use log::debug;
use rand::Rng;

use crate::board::{Board, Goal};
use crate::node::SearchNode;

/// Builds a scrambled `n`×`n` start configuration wrapped as a root search
/// node, using the thread RNG.
///
/// `scramble_steps` counts applied legal moves, so it is an upper bound on
/// the optimal solution length rather than a distance.
pub fn create_game_board(n: usize, scramble_steps: usize) -> SearchNode {
    create_game_board_with(n, scramble_steps, &mut rand::rng())
}

/// Like [`create_game_board`], but drawing moves from a caller-supplied
/// random source. Hand in a seeded RNG to make the scramble reproducible.
pub fn create_game_board_with<R: Rng + ?Sized>(
    n: usize,
    scramble_steps: usize,
    rng: &mut R,
) -> SearchNode {
    let goal = Goal::new(n);
    let mut board = Board::solved(&goal);
    board.shuffle(scramble_steps, rng);

    debug!("generated {n}x{n} start with {scramble_steps} scramble moves");
    SearchNode::root(board)
}
