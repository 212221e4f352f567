mod action;
mod error;
mod game;
mod invariants;
mod phases;
mod snapshot;
mod types;

pub mod rules;

pub use action::{Move, MoveRequest};
pub use error::BoardError;
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, TokenBalanceInvariant,
    TokenBudgetInvariant,
};
pub use phases::Phase;
pub use rules::Line;
pub use snapshot::Snapshot;
pub use types::{Board, Square, Symbol};
