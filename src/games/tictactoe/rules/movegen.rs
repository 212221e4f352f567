//! Legal move generation.
//!
//! Two phases, chosen by the mover's token count:
//!
//! - **Placement**: every empty square is a destination, except the center
//!   on the opening move of the game.
//! - **Relocation**: for each of the mover's tokens, lift it on a cloned
//!   board and offer every placement destination there other than the
//!   square it came from.
//!
//! Generation never touches the caller's board.

use super::super::{Board, Move, Phase, Square};
use tracing::{instrument, trace};

/// All legal moves for the player to move, in generation order.
///
/// Squares are visited in ascending index order. For relocations the source
/// square is the outer loop and the destination the inner one.
#[instrument(skip(board), fields(size = board.size(), turn = board.turn()))]
pub fn valid_moves(board: &Board) -> Vec<Move> {
    match board.phase() {
        Phase::Placement => placement_targets(board)
            .map(|to| Move::Place { to })
            .collect(),
        Phase::Relocation => relocations(board),
    }
}

/// Empty squares a new token may go to.
fn placement_targets(board: &Board) -> impl Iterator<Item = usize> + '_ {
    let opening = board.turn() == 0;
    let center = board.center();
    board
        .squares()
        .iter()
        .enumerate()
        .filter(move |&(ix, square)| square.is_empty() && !(opening && ix == center))
        .map(|(ix, _)| ix)
}

fn relocations(board: &Board) -> Vec<Move> {
    let mover = Square::Occupied(board.current_symbol());
    let mut moves = Vec::new();

    for (from, _) in board
        .squares()
        .iter()
        .enumerate()
        .filter(|&(_, &square)| square == mover)
    {
        let mut lifted = board.clone();
        lifted.set(from, Square::Empty);
        moves.extend(
            placement_targets(&lifted)
                .filter(|&to| to != from)
                .map(|to| Move::Relocate { from, to }),
        );
    }

    trace!(count = moves.len(), "Generated relocations");
    moves
}
