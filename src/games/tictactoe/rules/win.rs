//! Win detection logic for scarce-token tic-tac-toe.

use super::super::{Board, Symbol};
use super::lines::{lines, score_line};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first complete line in [`lines`] order, or
/// `None` if no line is filled by a single symbol. A line whose start square
/// is empty is never complete.
#[instrument(skip(board), fields(size = board.size(), turn = board.turn()))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    let size = board.size();
    lines(size)
        .into_iter()
        .find(|&line| score_line(board, line, None) == size)
        .and_then(|line| board.symbol_at(line.start))
}

#[cfg(test)]
mod tests {
    use super::super::super::Square;
    use super::*;

    fn board_with(size: usize, squares: &[(usize, Symbol)]) -> Board {
        let mut cells = vec![Square::Empty; size * size];
        for &(ix, symbol) in squares {
            cells[ix] = Square::Occupied(symbol);
        }
        Board::reconstruct(&cells, 0).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        for size in [3, 5, 7] {
            assert_eq!(check_winner(&Board::new(size).unwrap()), None);
        }
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X)]);
        assert_eq!(check_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_winner_anti_diagonal_five() {
        let squares: Vec<_> = [4, 8, 12, 16, 20].map(|ix| (ix, Symbol::O)).to_vec();
        let board = board_with(5, &squares);
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_winner_last_column() {
        let board = board_with(3, &[(2, Symbol::O), (5, Symbol::O), (8, Symbol::O)]);
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(
            5,
            &[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X), (3, Symbol::X)],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(3, &[(0, Symbol::X), (4, Symbol::O), (8, Symbol::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Middle row (O) and bottom row (X) are both complete on this
        // unreachable position; row 1 is scanned before row 2.
        let board = board_with(
            3,
            &[
                (3, Symbol::O),
                (4, Symbol::O),
                (5, Symbol::O),
                (6, Symbol::X),
                (7, Symbol::X),
                (8, Symbol::X),
            ],
        );
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }
}
