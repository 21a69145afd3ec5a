//! # Text Codec Module
//!
//! Compact text forms for hosts that cannot pass structured data across a
//! boundary. A board travels as the comma-separated string
//! `n,t0,t1,…,t(n²−1)` with the blank encoded as −1, and a solution travels
//! back as one `U`/`D`/`L`/`R` character per blank move.

use thiserror::Error;

use crate::board::{Board, Direction, Goal};
use crate::solver::solve;
use crate::tile::{BLANK_SYMBOL, Tile};

/// Failure modes of the text adapter. Parse failures identify the offending
/// field; no solver runs until the board has been validated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected {expected} comma-separated fields for a {n}x{n} board but got {found}")]
    WrongFieldCount {
        n: usize,
        expected: usize,
        found: usize,
    },
    #[error("field {index} is not an integer: {text:?}")]
    InvalidField { index: usize, text: String },
    #[error("board side must be at least 2, got {0}")]
    SideTooSmall(i64),
    #[error("field {index} holds symbol {symbol}, outside 1..={max} and the blank")]
    SymbolOutOfRange { index: usize, symbol: i32, max: i32 },
    #[error("tile symbol {0} appears more than once")]
    DuplicateSymbol(i32),
    #[error("board is not reachable from the solved configuration")]
    Unsolvable,
}

/// Parses the CSV board form.
///
/// The first field is the side length; the remaining n² fields are tile
/// symbols in row-major order, each of {1, …, n²−1} exactly once plus the
/// blank as −1.
pub fn parse_board(csv: &str) -> Result<Board, CodecError> {
    let fields: Vec<&str> = csv.split(',').collect();

    let side_text = fields[0].trim();
    let side: i64 = side_text.parse().map_err(|_| CodecError::InvalidField {
        index: 0,
        text: side_text.to_string(),
    })?;
    if side < 2 {
        return Err(CodecError::SideTooSmall(side));
    }

    let n = side as usize;
    let area = n * n;
    if fields.len() != area + 1 {
        return Err(CodecError::WrongFieldCount {
            n,
            expected: area + 1,
            found: fields.len(),
        });
    }

    let max_symbol = (area - 1) as i32;
    let mut seen = vec![false; area];
    let mut tiles = Vec::with_capacity(area);

    for (index, field) in fields.iter().enumerate().skip(1) {
        let text = field.trim();
        let symbol: i32 = text.parse().map_err(|_| CodecError::InvalidField {
            index,
            text: text.to_string(),
        })?;

        if symbol != BLANK_SYMBOL && !(1..=max_symbol).contains(&symbol) {
            return Err(CodecError::SymbolOutOfRange {
                index,
                symbol,
                max: max_symbol,
            });
        }

        // Slot 0 is reserved for the blank; n² distinct slots mean the
        // multiset is exactly {1, …, n²−1, blank}.
        let slot = if symbol == BLANK_SYMBOL {
            0
        } else {
            symbol as usize
        };
        if seen[slot] {
            return Err(CodecError::DuplicateSymbol(symbol));
        }
        seen[slot] = true;

        tiles.push(Tile::new(symbol));
    }

    Ok(Board::from_tiles(&Goal::new(n), tiles))
}

/// Renders a move sequence as its single-character codes.
pub fn encode_moves(moves: &[Direction]) -> String {
    moves.iter().map(|m| m.code()).collect()
}

/// Parses a CSV board, solves it, and emits the solution string.
pub fn solve_board(csv: &str) -> Result<String, CodecError> {
    let board = parse_board(csv)?;
    let moves = solve(board).ok_or(CodecError::Unsolvable)?;
    Ok(encode_moves(&moves))
}
