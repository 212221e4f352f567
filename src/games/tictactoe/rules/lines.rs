//! Line enumeration and scoring.
//!
//! Every row, column and both diagonals of an N×N board are described by a
//! start index and a stride: the line visits `start`, `start + stride`, …
//! for `size` squares.

use super::super::{Board, Square, Symbol};
use tracing::instrument;

/// A straight line of `size` squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Index of the first square.
    pub start: usize,
    /// Distance between consecutive squares.
    pub stride: usize,
}

impl Line {
    /// Creates a line descriptor.
    pub fn new(start: usize, stride: usize) -> Self {
        Self { start, stride }
    }

    /// Indices visited by this line on a board of side `size`.
    pub fn indices(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |step| self.start + step * self.stride)
    }
}

/// All lines of a board of side `size`.
///
/// Order: main diagonal, anti-diagonal, then rows and columns interleaved
/// (`row 0, col 0, row 1, col 1, …`). Winner detection depends on it.
pub fn lines(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 + 2 * size);
    lines.push(Line::new(0, size + 1));
    lines.push(Line::new(size - 1, size - 1));
    for ix in 0..size {
        lines.push(Line::new(ix * size, 1));
        lines.push(Line::new(ix, size));
    }
    lines
}

/// Counts the squares on `line` holding `symbol`.
///
/// With `symbol == None` the line is scored for whatever symbol sits on its
/// start square; a line starting on an empty square then scores 0.
pub fn score_line(board: &Board, line: Line, symbol: Option<Symbol>) -> usize {
    let target = match symbol.or_else(|| board.symbol_at(line.start)) {
        Some(symbol) => Square::Occupied(symbol),
        None => return 0,
    };
    let squares = board.squares();
    line.indices(board.size())
        .filter(|&ix| squares[ix] == target)
        .count()
}

/// Best partial line for `symbol`: the highest [`score_line`] over all lines.
#[instrument(skip(board), fields(size = board.size()))]
pub fn get_score(board: &Board, symbol: Symbol) -> usize {
    lines(board.size())
        .into_iter()
        .map(|line| score_line(board, line, Some(symbol)))
        .max()
        .unwrap_or(0)
}
