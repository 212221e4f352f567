//! Board-level entry points for the rules.
//!
//! Thin methods over the free functions in [`rules`](super::rules), so
//! callers can work with a single `Board` value.

use super::rules;
use super::{Board, Move, MoveRequest, Symbol};

impl Board {
    /// Legal moves for the player to move, in generation order.
    pub fn valid_moves(&self) -> Vec<Move> {
        rules::valid_moves(self)
    }

    /// Symbol of the first complete line, if any.
    pub fn check_winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }

    /// Longest partial line held by `symbol`.
    pub fn get_score(&self, symbol: Symbol) -> usize {
        rules::get_score(self, symbol)
    }

    /// Applies `action` if legal. Returns `false` and changes nothing otherwise.
    pub fn do_move(&mut self, action: Move) -> bool {
        rules::do_move(self, action)
    }

    /// Resolves a partial request to the first matching legal move and applies it.
    pub fn do_request(&mut self, request: MoveRequest) -> bool {
        rules::do_request(self, request)
    }

    /// Applies the bare-index shorthand. Only a placement on an empty square
    /// can succeed; an occupied square names no destination and is rejected.
    pub fn do_index(&mut self, index: usize) -> bool {
        let request = MoveRequest::at(index, self);
        self.do_request(request)
    }
}
