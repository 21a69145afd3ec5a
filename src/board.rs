//! # Board Module
//!
//! This module contains the N×N sliding-tile board and everything that
//! operates on a single state: move legality, move application, scrambling,
//! and the search heuristic. Tiles are kept in a row-major `Vec` with the
//! blank's position cached alongside, which keeps moves O(1) and lets the
//! heuristic address squares by row and column directly.
//!
//! Every board holds a shared reference to the canonical solved layout for
//! its side length, which the heuristic consults to locate each tile's goal
//! square.

use std::fmt::{self, Display};
use std::sync::Arc;

use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::tile::Tile;

use Direction::*;

/// Array containing all possible movement directions, in the fixed order
/// used for child generation and scrambling.
pub const ALL_DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

/// Exact, compact encoding of a board's tile permutation (blank mapped to 0).
///
/// Distinct layouts always produce distinct fingerprints, so deduplication
/// never confuses two states.
pub type Fingerprint = Box<[u16]>;

/// A direction in which the blank square can move; the adjacent tile slides
/// the opposite way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The reverse of this direction. A move is never allowed to immediately
    /// undo the one before it.
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Single-character code used by the text adapter.
    pub fn code(self) -> char {
        match self {
            Up => 'U',
            Down => 'D',
            Left => 'L',
            Right => 'R',
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Up => write!(f, "up"),
            Down => write!(f, "down"),
            Left => write!(f, "left"),
            Right => write!(f, "right"),
        }
    }
}

/// The canonical solved layout for one side length: symbol k sits at index
/// k − 1 and the blank occupies the last square.
///
/// One `Goal` is allocated per solve and shared read-only by every board
/// derived from the same root.
#[derive(Debug)]
pub struct Goal {
    n: usize,
    tiles: Vec<Tile>,
}

impl Goal {
    /// Builds the solved layout for an `n`×`n` board.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`; a board needs at least one movable tile.
    pub fn new(n: usize) -> Arc<Goal> {
        assert!(n >= 2, "board side must be at least 2");
        assert!(
            n * n - 1 <= u16::MAX as usize,
            "tile symbols must fit the 16-bit fingerprint encoding"
        );

        let area = n * n;
        let mut tiles: Vec<Tile> = (1..area as i32).map(Tile::new).collect();
        tiles.push(Tile::BLANK);

        Arc::new(Goal { n, tiles })
    }

    pub fn side(&self) -> usize {
        self.n
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Goal index of a tile, located by scanning the solved layout.
    pub fn index_of(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .position(|t| *t == tile)
            .expect("every tile of a valid board appears in the solved layout")
    }
}

/// One state of an N×N sliding-tile puzzle.
///
/// A board knows its tile layout, where the blank is, and which direction the
/// blank moved last (used to forbid a move from immediately undoing its
/// predecessor). Cloning a board yields an independent state; the solved
/// layout reference is shared.
#[derive(Clone, Debug)]
pub struct Board {
    n: usize,
    tiles: Vec<Tile>,
    blank_index: usize,
    last_direction: Option<Direction>,
    goal: Arc<Goal>,
}

/// Boards compare element-wise over their tiles; move history and cached
/// positions do not participate.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.n == other.n && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Board {
    /// A board in the solved configuration of the given goal.
    pub fn solved(goal: &Arc<Goal>) -> Board {
        let n = goal.side();
        Board {
            n,
            tiles: goal.tiles().to_vec(),
            blank_index: n * n - 1,
            last_direction: None,
            goal: Arc::clone(goal),
        }
    }

    /// A board adopting a caller-provided layout. The blank position is
    /// derived by scanning the tiles.
    ///
    /// # Panics
    ///
    /// Panics if the layout contains no blank; callers validate layouts
    /// before constructing boards from them.
    pub fn from_tiles(goal: &Arc<Goal>, tiles: Vec<Tile>) -> Board {
        debug_assert_eq!(tiles.len(), goal.side() * goal.side());
        let blank_index = tiles
            .iter()
            .position(|t| t.is_blank())
            .expect("layout contains a blank tile");

        Board {
            n: goal.side(),
            tiles,
            blank_index,
            last_direction: None,
            goal: Arc::clone(goal),
        }
    }

    pub fn side(&self) -> usize {
        self.n
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn goal(&self) -> &Arc<Goal> {
        &self.goal
    }

    /// Tile at the given row and column.
    pub fn at(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.n + col]
    }

    /// Erases the move history so every in-bounds move is available again.
    /// Root boards carry no history.
    pub fn clear_last_direction(&mut self) {
        self.last_direction = None;
    }

    /// Whether moving the blank in `direction` stays on the board.
    fn in_bounds(&self, direction: Direction) -> bool {
        match direction {
            Up => self.blank_index >= self.n,
            Down => self.blank_index + self.n < self.n * self.n,
            Left => self.blank_index % self.n != 0,
            Right => (self.blank_index + 1) % self.n != 0,
        }
    }

    /// Index the blank lands on when moved in `direction`. Only meaningful
    /// when the move is in bounds.
    fn target_index(&self, direction: Direction) -> usize {
        match direction {
            Up => self.blank_index - self.n,
            Down => self.blank_index + self.n,
            Left => self.blank_index - 1,
            Right => self.blank_index + 1,
        }
    }

    /// A move is legal when it stays on the board and does not immediately
    /// undo the previous move.
    pub fn is_legal(&self, direction: Direction) -> bool {
        if self.last_direction == Some(direction.opposite()) {
            return false;
        }
        self.in_bounds(direction)
    }

    /// Legal moves from this state, in the fixed `ALL_DIRECTIONS` order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .filter(|d| self.is_legal(*d))
            .collect()
    }

    /// Moves the blank one square in `direction`, swapping it with the tile
    /// there and updating the cached blank position and move history.
    ///
    /// Callers only apply directions reported legal by [`Board::is_legal`].
    pub fn move_blank(&mut self, direction: Direction) {
        debug_assert!(self.is_legal(direction));

        let target = self.target_index(direction);
        self.tiles.swap(self.blank_index, target);
        self.blank_index = target;
        self.last_direction = Some(direction);
    }

    /// Scrambles the board with `steps` random legal moves.
    ///
    /// Each iteration recomputes the legal moves from the current state,
    /// which already excludes the immediate reversal of the previous move,
    /// and applies one chosen uniformly at random. Every intermediate state
    /// is reached by a legal move, so the result is always solvable.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, steps: usize, rng: &mut R) {
        for _ in 0..steps {
            let moves = self.legal_moves();
            let direction = *moves
                .choose(rng)
                .expect("a board always has at least one legal move");
            self.move_blank(direction);
        }
        trace!("scrambled {0}x{0} board with {1} moves", self.n, steps);
    }

    /// Sum over non-blank tiles of the taxicab distance from each tile's
    /// current square to its goal square.
    pub fn manhattan(&self) -> u32 {
        let n = self.n;
        let mut total = 0;

        for (index, tile) in self.tiles.iter().enumerate() {
            if tile.is_blank() {
                continue;
            }
            let goal_index = self.goal.index_of(*tile);
            total += (index % n).abs_diff(goal_index % n) + (index / n).abs_diff(goal_index / n);
        }

        total as u32
    }

    /// Number of linear-conflict pairs on the board.
    ///
    /// Two tiles form a row conflict when both sit in the row they belong to
    /// and their left-to-right order is inverted relative to the solved
    /// layout; columns are treated symmetrically. A tile consumed by a pair
    /// is skipped for further pairs in that row or column, so each tile
    /// contributes at most one row conflict and one column conflict. The
    /// blank never participates.
    pub fn linear_conflicts(&self) -> u32 {
        let n = self.n;
        let mut pairs = 0;

        for row in 0..n {
            let mut used = vec![false; n];
            for a in 0..n {
                if used[a] {
                    continue;
                }
                let first = self.at(row, a);
                if first.is_blank() {
                    continue;
                }
                let first_goal = self.goal.index_of(first);
                if first_goal / n != row {
                    continue;
                }
                for b in (a + 1)..n {
                    if used[b] {
                        continue;
                    }
                    let second = self.at(row, b);
                    if second.is_blank() {
                        continue;
                    }
                    let second_goal = self.goal.index_of(second);
                    if second_goal / n != row {
                        continue;
                    }
                    if first_goal % n > second_goal % n {
                        pairs += 1;
                        used[a] = true;
                        used[b] = true;
                        break;
                    }
                }
            }
        }

        for col in 0..n {
            let mut used = vec![false; n];
            for a in 0..n {
                if used[a] {
                    continue;
                }
                let first = self.at(a, col);
                if first.is_blank() {
                    continue;
                }
                let first_goal = self.goal.index_of(first);
                if first_goal % n != col {
                    continue;
                }
                for b in (a + 1)..n {
                    if used[b] {
                        continue;
                    }
                    let second = self.at(b, col);
                    if second.is_blank() {
                        continue;
                    }
                    let second_goal = self.goal.index_of(second);
                    if second_goal % n != col {
                        continue;
                    }
                    if first_goal / n > second_goal / n {
                        pairs += 1;
                        used[a] = true;
                        used[b] = true;
                        break;
                    }
                }
            }
        }

        pairs
    }

    /// The admissible, consistent cost estimate guiding the search:
    /// Manhattan distance plus two moves per linear-conflict pair.
    pub fn heuristic(&self) -> u32 {
        self.manhattan() + 2 * self.linear_conflicts()
    }

    /// A board is solved exactly when every tile is on its goal square.
    pub fn is_solved(&self) -> bool {
        self.manhattan() == 0
    }

    /// Exact encoding of the tile permutation for deduplication.
    pub fn fingerprint(&self) -> Fingerprint {
        self.tiles
            .iter()
            .map(|t| if t.is_blank() { 0 } else { t.symbol() as u16 })
            .collect()
    }
}

/// Displays the board as a grid, the blank rendered as spaces.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tile) in self.tiles.iter().enumerate() {
            if index % self.n == 0 && index != 0 {
                writeln!(f)?;
            }

            if tile.is_blank() {
                write!(f, "   ")?;
            } else {
                write!(f, "{:2} ", tile.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn board_from(n: usize, symbols: &[i32]) -> Board {
        let goal = Goal::new(n);
        Board::from_tiles(&goal, symbols.iter().copied().map(Tile::new).collect())
    }

    #[test]
    fn solved_layout() {
        let board = Board::solved(&Goal::new(3));

        let symbols: Vec<i32> = board.tiles().iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, vec![1, 2, 3, 4, 5, 6, 7, 8, -1]);
        assert_eq!(board.blank_index(), 8);
        assert_eq!(board.last_direction(), None);
        assert!(board.is_solved());
        assert_eq!(board.heuristic(), 0);
    }

    #[test]
    fn at_is_row_major() {
        let board = Board::solved(&Goal::new(3));
        assert_eq!(board.at(0, 0), Tile::new(1));
        assert_eq!(board.at(1, 2), Tile::new(6));
        assert!(board.at(2, 2).is_blank());
    }

    #[test]
    fn corner_legality() {
        // Blank in the bottom-right corner.
        let board = Board::solved(&Goal::new(3));
        assert_eq!(board.legal_moves(), vec![Up, Left]);

        // Blank in the top-left corner.
        let board = board_from(3, &[-1, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Down, Right]);

        // Blank in the top-right corner.
        let board = board_from(3, &[1, 2, -1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Down, Left]);

        // Blank in the bottom-left corner.
        let board = board_from(3, &[1, 2, 3, 4, 5, 6, -1, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Up, Right]);
    }

    #[test]
    fn edge_legality() {
        // Top edge, middle column.
        let board = board_from(3, &[1, -1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Down, Left, Right]);

        // Left edge, middle row.
        let board = board_from(3, &[1, 2, 3, -1, 4, 5, 6, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Up, Down, Right]);

        // Right edge, middle row.
        let board = board_from(3, &[1, 2, 3, 4, 5, -1, 6, 7, 8]);
        assert_eq!(board.legal_moves(), vec![Up, Down, Left]);

        // Bottom edge, middle column.
        let board = board_from(3, &[1, 2, 3, 4, 5, 6, 7, -1, 8]);
        assert_eq!(board.legal_moves(), vec![Up, Left, Right]);
    }

    #[test]
    fn immediate_reversal_is_rejected() {
        let mut board = Board::solved(&Goal::new(3));
        board.move_blank(Up);

        assert!(!board.is_legal(Down));
        assert!(!board.legal_moves().contains(&Down));
    }

    #[test]
    fn move_blank_swaps_and_tracks() {
        let mut board = Board::solved(&Goal::new(3));
        board.move_blank(Up);

        assert_eq!(board.blank_index(), 5);
        assert_eq!(board.at(2, 2), Tile::new(6));
        assert!(board.at(1, 2).is_blank());
        assert_eq!(board.last_direction(), Some(Up));
    }

    #[test]
    fn clones_are_independent() {
        let original = Board::solved(&Goal::new(3));
        let mut copy = original.clone();
        copy.move_blank(Left);

        assert!(original.is_solved());
        assert_ne!(original, copy);
    }

    #[test]
    fn shuffle_preserves_tile_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::solved(&Goal::new(3));
        board.shuffle(100, &mut rng);

        let mut symbols: Vec<i32> = board.tiles().iter().map(|t| t.symbol()).collect();
        symbols.sort_unstable();
        assert_eq!(symbols, vec![-1, 1, 2, 3, 4, 5, 6, 7, 8]);

        let blank = board.tiles().iter().position(|t| t.is_blank());
        assert_eq!(blank, Some(board.blank_index()));
    }

    #[test]
    fn shuffle_zero_steps_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::solved(&Goal::new(4));
        board.shuffle(0, &mut rng);

        assert!(board.is_solved());
        assert_eq!(board.last_direction(), None);
    }

    #[test]
    fn manhattan_without_conflicts() {
        let board = board_from(3, &[8, 4, 6, 3, 7, 1, 5, 2, -1]);

        assert_eq!(board.manhattan(), 18);
        assert_eq!(board.linear_conflicts(), 0);
        assert_eq!(board.heuristic(), 18);
    }

    #[test]
    fn single_column_conflict() {
        // Tiles 6 and 3 both belong to the rightmost column and sit there in
        // inverted order.
        let board = board_from(3, &[8, 4, 6, 1, 7, 3, 5, 2, -1]);

        assert_eq!(board.manhattan(), 14);
        assert_eq!(board.linear_conflicts(), 1);
        assert_eq!(board.heuristic(), 16);
    }

    #[test]
    fn single_row_conflict() {
        let board = board_from(3, &[2, 1, 3, 4, 5, 6, 7, 8, -1]);

        assert_eq!(board.manhattan(), 2);
        assert_eq!(board.linear_conflicts(), 1);
        assert_eq!(board.heuristic(), 4);
    }

    #[test]
    fn conflicting_tile_is_consumed_within_its_row() {
        // Row 0 fully reversed: only one pair counts because both tiles of
        // the first conflict are consumed.
        let board = board_from(3, &[3, 2, 1, 4, 5, 6, 7, 8, -1]);

        assert_eq!(board.manhattan(), 4);
        assert_eq!(board.linear_conflicts(), 1);
        assert_eq!(board.heuristic(), 6);
    }

    #[test]
    fn solved_iff_manhattan_zero_iff_goal_layout() {
        let goal = Goal::new(3);
        let solved = Board::solved(&goal);
        assert!(solved.is_solved());
        assert_eq!(solved.manhattan(), 0);
        assert_eq!(solved.tiles(), goal.tiles());

        let mut moved = solved.clone();
        moved.move_blank(Up);
        assert!(!moved.is_solved());
        assert_ne!(moved.manhattan(), 0);
        assert_ne!(moved.tiles(), goal.tiles());
    }

    #[test]
    fn fingerprint_is_injective_over_layouts() {
        let solved = Board::solved(&Goal::new(2));
        assert_eq!(solved.fingerprint(), vec![1, 2, 3, 0].into_boxed_slice());

        let mut moved = solved.clone();
        moved.move_blank(Up);
        assert_ne!(solved.fingerprint(), moved.fingerprint());
    }

    #[test]
    fn equality_ignores_move_history() {
        let mut moved = Board::solved(&Goal::new(3));
        moved.move_blank(Up);

        // Same layout reached without any move history.
        let fresh = board_from(3, &[1, 2, 3, 4, 5, -1, 7, 8, 6]);
        assert_eq!(moved.last_direction(), Some(Up));
        assert_eq!(fresh.last_direction(), None);
        assert_eq!(moved, fresh);
    }
}
