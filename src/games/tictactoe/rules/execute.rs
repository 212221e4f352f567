//! Move validation and application.

use super::super::invariants::{BoardInvariants, InvariantSet};
use super::super::{Board, Move, MoveRequest, Square};
use super::movegen::valid_moves;
use tracing::{debug, instrument, warn};

/// Finds the first legal move satisfying `request`, in generation order.
///
/// A request without a destination never resolves: the engine only applies
/// squares the caller named.
#[instrument(skip(board), fields(turn = board.turn()))]
pub fn resolve(board: &Board, request: MoveRequest) -> Option<Move> {
    request.to?;
    valid_moves(board)
        .into_iter()
        .find(|candidate| request.matches(candidate))
}

/// Applies `action` if it is currently legal.
///
/// Returns `false` and leaves the board untouched otherwise. A relocation
/// clears its source and fills its destination as a single turn.
#[instrument(skip(board), fields(turn = board.turn(), symbol = %board.current_symbol()))]
pub fn do_move(board: &mut Board, action: Move) -> bool {
    if !valid_moves(board).contains(&action) {
        debug!(%action, "Rejected illegal move");
        return false;
    }

    let symbol = board.current_symbol();
    if let Some(from) = action.from() {
        board.set(from, Square::Empty);
    }
    board.set(action.to(), Square::Occupied(symbol));
    board.advance_turn();

    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(board)
    {
        warn!(?violations, "Board invariants drifted after move");
    }

    debug!(%action, turn = board.turn(), "Applied move");
    true
}

/// Resolves `request` against the legal moves and applies the match.
#[instrument(skip(board), fields(turn = board.turn()))]
pub fn do_request(board: &mut Board, request: MoveRequest) -> bool {
    match resolve(board, request) {
        Some(action) => do_move(board, action),
        None => {
            debug!(?request, "No legal move matches request");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Symbol;
    use super::*;

    fn relocation_board() -> Board {
        let mut board = Board::new(3).unwrap();
        for to in [0, 1, 2, 3, 7, 8] {
            assert!(do_move(&mut board, Move::Place { to }));
        }
        board
    }

    #[test]
    fn test_place_applies_and_advances_turn() {
        let mut board = Board::new(3).unwrap();
        assert!(do_move(&mut board, Move::Place { to: 0 }));
        assert_eq!(board.symbol_at(0), Some(Symbol::X));
        assert_eq!(board.turn(), 1);
        assert_eq!(board.current_symbol(), Symbol::O);
    }

    #[test]
    fn test_opening_center_rejected() {
        let mut board = Board::new(3).unwrap();
        assert!(!do_move(&mut board, Move::Place { to: 4 }));
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_occupied_and_out_of_range_rejected() {
        let mut board = Board::new(3).unwrap();
        assert!(do_move(&mut board, Move::Place { to: 0 }));
        let before = board.clone();

        assert!(!do_move(&mut board, Move::Place { to: 0 }));
        assert!(!do_move(&mut board, Move::Place { to: 9 }));
        assert!(!do_move(&mut board, Move::Relocate { from: 0, to: 1 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_relocation_is_one_turn() {
        // X: 0, 2, 7   O: 1, 3, 8
        let mut board = relocation_board();
        assert_eq!(board.turn(), 6);

        assert!(!do_move(&mut board, Move::Place { to: 4 }));
        assert!(do_move(&mut board, Move::Relocate { from: 7, to: 4 }));
        assert_eq!(board.turn(), 7);
        assert!(board.is_empty(7));
        assert_eq!(board.symbol_at(4), Some(Symbol::X));
        assert_eq!(board.count_symbol(Symbol::X), 3);
    }

    #[test]
    fn test_relocating_opponent_token_rejected() {
        let mut board = relocation_board();
        let before = board.clone();
        assert!(!do_move(&mut board, Move::Relocate { from: 1, to: 4 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_bare_index_places_on_empty_square() {
        let mut board = Board::new(3).unwrap();
        let request = MoveRequest::at(5, &board);
        assert!(do_request(&mut board, request));
        assert_eq!(board.symbol_at(5), Some(Symbol::X));
    }

    #[test]
    fn test_bare_index_on_own_token_rejected() {
        let mut board = relocation_board();
        let before = board.clone();
        let request = MoveRequest::at(2, &board);
        assert_eq!(request, MoveRequest::new(Some(2), None));
        assert_eq!(resolve(&board, request), None);

        assert!(!do_request(&mut board, request));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_request_rejected() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(resolve(&board, MoveRequest::default()), None);
        assert!(!do_request(&mut board, MoveRequest::default()));
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_explicit_relocation_request_applies() {
        let mut board = relocation_board();
        assert!(do_request(&mut board, MoveRequest::new(Some(2), Some(5))));
        assert!(board.is_empty(2));
        assert_eq!(board.symbol_at(5), Some(Symbol::X));
        assert_eq!(board.turn(), 7);
    }

    #[test]
    fn test_request_without_match_is_rejected() {
        let mut board = relocation_board();
        let before = board.clone();
        assert!(!do_request(&mut board, MoveRequest::new(Some(2), Some(2))));
        assert!(!do_request(&mut board, MoveRequest::new(None, Some(4))));
        assert_eq!(board, before);
    }
}
