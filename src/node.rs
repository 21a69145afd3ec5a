//! # Search Node Module
//!
//! A search node is a board plus the metadata the search needs: the depth at
//! which the board was reached (the g-value), a link to the node that
//! generated it, and the cached composite cost f = g + h that orders the
//! frontier. Nodes form a tree rooted at the start configuration; only the
//! child-to-parent direction is ever traversed, when reconstructing the
//! solution path.

use std::rc::Rc;

use crate::board::Board;
use crate::closed_set::ClosedSet;

/// One node of the search tree.
///
/// The frontier owns a node until it pops, after which the solver holds it;
/// parent links keep every ancestor of a live node reachable until the whole
/// tree is released at the end of the solve.
pub struct SearchNode {
    board: Board,
    depth: u32,
    parent: Option<Rc<SearchNode>>,
    cost: u32,
}

impl SearchNode {
    /// Wraps a board reached after `depth` moves. The cost is computed here
    /// and never changes afterwards.
    pub fn new(board: Board, depth: u32, parent: Option<Rc<SearchNode>>) -> SearchNode {
        let cost = depth + board.heuristic();
        SearchNode {
            board,
            depth,
            parent,
            cost,
        }
    }

    /// Wraps a start configuration as the root of a fresh search tree.
    /// A root carries no move history, so every in-bounds first move is
    /// available to the search.
    pub fn root(mut board: Board) -> SearchNode {
        board.clear_last_direction();
        SearchNode::new(board, 0, None)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Expands this node into its unseen children.
    ///
    /// Each legal move is applied to a copy of the board; the resulting
    /// layout is stamped into the closed set at this moment, and layouts
    /// seen before are discarded. Surviving children carry `depth + 1`, a
    /// parent link to this node, and a freshly computed cost.
    pub fn move_children(self: &Rc<Self>, closed: &mut ClosedSet) -> Vec<Rc<SearchNode>> {
        let mut children = Vec::new();

        for direction in self.board.legal_moves() {
            let mut board = self.board.clone();
            board.move_blank(direction);

            if closed.insert(board.fingerprint()) {
                children.push(Rc::new(SearchNode::new(
                    board,
                    self.depth + 1,
                    Some(Rc::clone(self)),
                )));
            }
        }

        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Goal};
    use crate::tile::Tile;

    fn board_from(n: usize, symbols: &[i32]) -> Board {
        let goal = Goal::new(n);
        Board::from_tiles(&goal, symbols.iter().copied().map(Tile::new).collect())
    }

    #[test]
    fn root_cost_is_the_heuristic() {
        let root = SearchNode::root(board_from(3, &[8, 4, 6, 3, 7, 1, 5, 2, -1]));

        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
        assert_eq!(root.cost(), 18);
    }

    #[test]
    fn root_forgets_move_history() {
        let mut board = Board::solved(&Goal::new(3));
        board.move_blank(Direction::Up);

        let root = SearchNode::root(board);
        assert_eq!(root.board().last_direction(), None);
    }

    #[test]
    fn children_extend_parent_by_one_move() {
        let root = Rc::new(SearchNode::root(board_from(
            3,
            &[1, 2, 3, 4, 5, 6, 7, -1, 8],
        )));
        let mut closed = ClosedSet::new();
        closed.insert(root.board().fingerprint());

        let children = root.move_children(&mut closed);
        assert_eq!(children.len(), 3);

        for child in &children {
            assert_eq!(child.depth(), root.depth() + 1);
            assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
            assert_eq!(child.cost(), child.depth() + child.board().heuristic());

            // The child differs from the parent by exactly one swap
            // involving the blank.
            let differing: Vec<usize> = (0..9)
                .filter(|&i| root.board().tiles()[i] != child.board().tiles()[i])
                .collect();
            assert_eq!(differing.len(), 2);
            assert!(differing.contains(&child.board().blank_index()));
            assert!(differing.contains(&root.board().blank_index()));
        }
    }

    #[test]
    fn children_already_seen_are_discarded() {
        let root = Rc::new(SearchNode::root(Board::solved(&Goal::new(3))));
        let mut closed = ClosedSet::new();
        closed.insert(root.board().fingerprint());

        let children = root.move_children(&mut closed);
        assert_eq!(children.len(), 2);

        // A second expansion finds every layout already stamped.
        assert!(root.move_children(&mut closed).is_empty());
    }

    #[test]
    fn children_never_regenerate_their_parent() {
        let root = Rc::new(SearchNode::root(Board::solved(&Goal::new(3))));
        let mut closed = ClosedSet::new();
        closed.insert(root.board().fingerprint());

        for child in root.move_children(&mut closed) {
            for grandchild in child.move_children(&mut closed) {
                assert_ne!(grandchild.board(), root.board());
            }
        }
    }
}
