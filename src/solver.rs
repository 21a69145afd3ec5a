//! # Solver Module
//!
//! This module drives the A* search. The solver seeds the frontier with the
//! root node, repeatedly pops the cheapest unexpanded node, and expands its
//! children until it pops a solved board. Because the heuristic is
//! admissible and consistent, the first solved node popped is an optimal
//! solution, and walking its parent links backwards yields the move
//! sequence. Detailed statistics about the search are collected along the
//! way.

use std::rc::Rc;
use std::time::Instant;

use log::debug;

use crate::board::{Board, Direction};
use crate::closed_set::ClosedSet;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::stats::SolveStats;

/// A* driver for one solve.
///
/// A solver owns its frontier and closed set; it is single-threaded and not
/// reentrant. Create one solver per start configuration.
pub struct Solver {
    frontier: Frontier,
    closed: ClosedSet,
    /// Nodes popped from the frontier.
    nodes_expanded: usize,
    /// Successor states produced, including discarded duplicates.
    nodes_generated: usize,
    /// Successor states accepted into the frontier.
    nodes_enqueued: usize,
    /// Successor states discarded because their layout was already seen.
    duplicates_pruned: usize,
    /// Deepest node popped so far.
    max_depth: u32,
    /// Largest frontier size observed.
    peak_frontier: usize,
    /// Length of the solution found, once the solve completes.
    solution_moves: usize,
    /// Wall-clock duration of the solve in milliseconds.
    solve_duration_ms: u128,
}

impl Solver {
    /// Creates a solver seeded with the given root: the frontier holds the
    /// root node and the closed set is stamped with its layout.
    pub fn new(root: SearchNode) -> Solver {
        let mut frontier = Frontier::new();
        let mut closed = ClosedSet::new();

        closed.insert(root.board().fingerprint());
        frontier.push(Rc::new(root));

        Solver {
            frontier,
            closed,
            nodes_expanded: 0,
            nodes_generated: 0,
            nodes_enqueued: 0,
            duplicates_pruned: 0,
            max_depth: 0,
            peak_frontier: 1,
            solution_moves: 0,
            solve_duration_ms: 0,
        }
    }

    /// Runs the search to completion.
    ///
    /// Returns the solved node, from which the move sequence is recovered
    /// with [`solution_moves`]. Returns `None` only if the frontier drains,
    /// which cannot happen for a start reachable from the solved board; on
    /// an unreachable start of any interesting size the loop consumes
    /// memory until the caller's external bound kicks in.
    pub fn solve(&mut self) -> Option<Rc<SearchNode>> {
        let start = Instant::now();

        while let Some(node) = self.frontier.pop() {
            self.nodes_expanded += 1;
            if node.depth() > self.max_depth {
                self.max_depth = node.depth();
            }

            if node.is_solved() {
                self.solution_moves = node.depth() as usize;
                self.solve_duration_ms = start.elapsed().as_millis();
                debug!(
                    "solved at depth {} after expanding {} nodes",
                    node.depth(),
                    self.nodes_expanded
                );
                return Some(node);
            }

            let attempted = node.board().legal_moves().len();
            let children = node.move_children(&mut self.closed);
            self.nodes_generated += attempted;
            self.duplicates_pruned += attempted - children.len();

            for child in children {
                self.nodes_enqueued += 1;
                self.frontier.push(child);
            }
            if self.frontier.len() > self.peak_frontier {
                self.peak_frontier = self.frontier.len();
            }
        }

        self.solve_duration_ms = start.elapsed().as_millis();
        debug!(
            "frontier drained after expanding {} nodes; start was unreachable",
            self.nodes_expanded
        );
        None
    }

    /// Statistics gathered by the most recent [`Solver::solve`] call.
    pub fn stats(&self) -> SolveStats {
        SolveStats {
            nodes_expanded: self.nodes_expanded,
            nodes_generated: self.nodes_generated,
            nodes_enqueued: self.nodes_enqueued,
            duplicates_pruned: self.duplicates_pruned,
            max_depth: self.max_depth,
            peak_frontier: self.peak_frontier,
            solution_moves: self.solution_moves,
            duration_ms: self.solve_duration_ms,
        }
    }
}

/// Recovers the ordered move sequence that leads from the root to `leaf`.
///
/// Walks the parent links collecting each node's last move and reverses the
/// result, so the first element is the first move to apply from the start
/// configuration. The root contributes nothing.
pub fn solution_moves(leaf: &Rc<SearchNode>) -> Vec<Direction> {
    let mut moves = Vec::with_capacity(leaf.depth() as usize);
    let mut current = leaf;

    while let Some(parent) = current.parent() {
        if let Some(direction) = current.board().last_direction() {
            moves.push(direction);
        }
        current = parent;
    }

    moves.reverse();
    moves
}

/// Solves a start configuration, returning the ordered blank moves of an
/// optimal solution.
///
/// Returns `None` only when the search space drains without reaching the
/// solved layout, i.e. the caller handed in a board that is not reachable
/// from the solved configuration.
pub fn solve(start: Board) -> Option<Vec<Direction>> {
    let mut solver = Solver::new(SearchNode::root(start));
    let leaf = solver.solve()?;
    Some(solution_moves(&leaf))
}
