//! Core domain types for scarce-token tic-tac-toe.

use super::error::BoardError;
use super::phases::Phase;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (moves on even turns, so always opens).
    X,
    /// Player O.
    O,
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's token.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol on this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Returns true if the square holds no token.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Option<Symbol>> for Square {
    fn from(symbol: Option<Symbol>) -> Self {
        symbol.map_or(Square::Empty, Square::Occupied)
    }
}

/// An odd-sized N×N board with its turn counter.
///
/// Squares are stored in row-major order: index `i` is row `i / size`,
/// column `i % size`. The fields are private; moves are applied through
/// [`Board::do_move`] and [`Board::do_request`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Square>,
    turn: usize,
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is below 3 or even.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !is_valid_size(size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Square::Empty; size * size],
            turn: 0,
        })
    }

    /// Rebuilds a board from a flat cell array and a turn counter.
    ///
    /// The side length is inferred from the cell count. The position itself
    /// is copied as-is, so a reconstructed board may hold a position that
    /// normal play could never reach.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCellCount`] when `cells.len()` is not the
    /// square of a valid odd size.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn reconstruct(cells: &[Square], turn: usize) -> Result<Self, BoardError> {
        let size = cells.len().isqrt();
        if !is_valid_size(size) || size * size != cells.len() {
            return Err(BoardError::InvalidCellCount { len: cells.len() });
        }
        Ok(Self {
            size,
            cells: cells.to_vec(),
            turn,
        })
    }

    /// Clears every square and rewinds the turn counter.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.turn = 0;
        self.cells.fill(Square::Empty);
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of moves applied so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Index of the center square.
    pub fn center(&self) -> usize {
        self.cells.len() / 2
    }

    /// Returns a copy of all squares in row-major order.
    pub fn cells_snapshot(&self) -> Vec<Square> {
        self.cells.clone()
    }

    /// Symbol that moves on the given turn.
    pub fn symbol_for_turn(turn: usize) -> Symbol {
        if turn % 2 == 0 { Symbol::X } else { Symbol::O }
    }

    /// Symbol whose turn it is.
    pub fn current_symbol(&self) -> Symbol {
        Self::symbol_for_turn(self.turn)
    }

    /// Square at `index`, or `None` when out of range.
    pub fn square_at(&self, index: usize) -> Option<Square> {
        self.cells.get(index).copied()
    }

    /// Symbol at `index`; `None` for an empty or out-of-range square.
    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.square_at(index).and_then(Square::symbol)
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.square_at(index), Some(Square::Empty))
    }

    /// Number of squares holding `symbol`.
    pub fn count_symbol(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|&&square| square == Square::Occupied(symbol))
            .count()
    }

    /// Phase of the player to move, derived from their token count.
    pub fn phase(&self) -> Phase {
        if self.count_symbol(self.current_symbol()) < self.size {
            Phase::Placement
        } else {
            Phase::Relocation
        }
    }

    /// Squares in row-major order.
    pub(crate) fn squares(&self) -> &[Square] {
        &self.cells
    }

    /// Writes a square. Callers guarantee `index` is in range.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.cells[index] = square;
    }

    /// Advances the turn counter by one.
    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, square) in squares.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(symbol) => write!(f, "{symbol}")?,
                }
            }
        }
        Ok(())
    }
}

fn is_valid_size(size: usize) -> bool {
    size >= 3 && size % 2 == 1
}
