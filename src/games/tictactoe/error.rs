//! Structural errors raised while building a board.

use derive_more::{Display, Error};

/// A board could not be built from the given shape.
///
/// Illegal moves are never reported through this type; they are ordinary
/// game flow and come back as `false` from the move executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length below 3 or even.
    #[display("Board size {size} is not valid for tic-tac-toe (3, 5, 7, ...)")]
    InvalidSize {
        /// Rejected side length.
        size: usize,
    },

    /// Cell array length is not the square of a valid odd size.
    #[display("Cell count {len} is not valid for tic-tac-toe (9, 25, 49, ...)")]
    InvalidCellCount {
        /// Rejected cell count.
        len: usize,
    },
}
