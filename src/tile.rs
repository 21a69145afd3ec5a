//! # Tile Module
//!
//! A tile is a value identified by its integer symbol. The blank square is a
//! regular tile carrying the reserved sentinel symbol, so boards can treat
//! every square uniformly and test for the blank with a predicate.

use std::fmt::{self, Display};

/// Symbol reserved for the blank tile.
pub const BLANK_SYMBOL: i32 = -1;

/// A single tile of the puzzle, identified solely by its symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    symbol: i32,
}

impl Tile {
    /// The blank tile.
    pub const BLANK: Tile = Tile {
        symbol: BLANK_SYMBOL,
    };

    pub fn new(symbol: i32) -> Tile {
        Tile { symbol }
    }

    pub fn symbol(self) -> i32 {
        self.symbol
    }

    /// `true` iff this tile is the blank square.
    pub fn is_blank(self) -> bool {
        self.symbol == BLANK_SYMBOL
    }
}

/// The blank renders as six spaces so it lines up with `"Tile k"`.
impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            write!(f, "      ")
        } else {
            write!(f, "Tile {}", self.symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_predicate() {
        assert!(Tile::BLANK.is_blank());
        assert!(!Tile::new(1).is_blank());
    }

    #[test]
    fn equality_follows_symbol() {
        assert_eq!(Tile::new(4), Tile::new(4));
        assert_ne!(Tile::new(4), Tile::new(5));
        assert_eq!(Tile::new(BLANK_SYMBOL), Tile::BLANK);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Tile::new(7).to_string(), "Tile 7");
        assert_eq!(Tile::BLANK.to_string(), "      ");
    }
}
