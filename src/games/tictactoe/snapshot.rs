//! Persistable board state: a flat cell array plus the turn counter.

use super::error::BoardError;
use super::{Board, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Serializable copy of a board.
///
/// Restoring goes through [`Board::reconstruct`], so the cell count is
/// validated but the position is not.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Squares in row-major order.
    cells: Vec<Square>,
    /// Number of moves applied.
    turn: usize,
}

impl Snapshot {
    /// Creates a snapshot from raw parts.
    pub fn new(cells: Vec<Square>, turn: usize) -> Self {
        Self { cells, turn }
    }
}

impl Board {
    /// Captures the board as a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cells_snapshot(), self.turn())
    }
}

impl TryFrom<Snapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        Board::reconstruct(&snapshot.cells, snapshot.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Move, Symbol};
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut board = Board::new(3).unwrap();
        assert!(board.do_move(Move::Place { to: 0 }));
        assert!(board.do_move(Move::Place { to: 4 }));

        let json = serde_json::to_string(&board.snapshot()).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        let restored = Board::try_from(restored).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.symbol_at(4), Some(Symbol::O));
    }

    #[test]
    fn test_bad_snapshot_rejected() {
        let snapshot = Snapshot::new(vec![Square::Empty; 12], 0);
        assert_eq!(
            Board::try_from(snapshot),
            Err(BoardError::InvalidCellCount { len: 12 })
        );
    }
}
