//! # taquin
//!
//! An optimal solver for N×N sliding-tile puzzles. The engine runs an A*
//! search guided by an admissible, consistent heuristic (Manhattan distance
//! plus linear conflicts), deduplicates states through an exact closed set,
//! and reconstructs the optimal move sequence by walking parent links from
//! the solved node back to the start.
//!
//! The library exposes the board entities, a data-level [`solve`] entry
//! point, and a text adapter ([`solve_board`]) for hosts that can only pass
//! strings across a boundary.

pub mod board;
pub mod closed_set;
pub mod codec;
pub mod frontier;
pub mod node;
pub mod shuffle;
pub mod solver;
pub mod stats;
pub mod tile;

pub use board::{ALL_DIRECTIONS, Board, Direction, Fingerprint, Goal};
pub use closed_set::ClosedSet;
pub use codec::{CodecError, encode_moves, parse_board, solve_board};
pub use frontier::Frontier;
pub use node::SearchNode;
pub use shuffle::{create_game_board, create_game_board_with};
pub use solver::{Solver, solution_moves, solve};
pub use stats::{SolveStats, StatsSummary};
pub use tile::{BLANK_SYMBOL, Tile};
