//! First-class board invariants.
//!
//! These are diagnostics, not rules. The executor checks them after each
//! applied move in debug builds and logs any drift; a reconstructed board
//! may legitimately break them.

use super::{Board, Symbol};
use strum::IntoEnumIterator;

/// A logical property that should hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X has as many tokens as O, or one more.
///
/// Holds under alternating play; the engine trusts callers to alternate and
/// never rejects a move over it.
pub struct TokenBalanceInvariant;

impl Invariant<Board> for TokenBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count_symbol(Symbol::X);
        let o = board.count_symbol(Symbol::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X holds as many tokens as O, or one more"
    }
}

/// No symbol has more tokens on the board than the side length.
pub struct TokenBudgetInvariant;

impl Invariant<Board> for TokenBudgetInvariant {
    fn holds(board: &Board) -> bool {
        Symbol::iter().all(|symbol| board.count_symbol(symbol) <= board.size())
    }

    fn description() -> &'static str {
        "No player has more tokens than the board size"
    }
}

/// Invariants checked after every applied move.
pub type BoardInvariants = (TokenBalanceInvariant, TokenBudgetInvariant);
