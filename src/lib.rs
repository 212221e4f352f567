//! Scarce Tic-Tac-Toe - rules engine for N×N tic-tac-toe with token scarcity
//!
//! Boards are odd-sized (3, 5, 7, ...). Each player may hold at most `size`
//! tokens; once that budget is spent, a turn relocates an existing token
//! instead of placing a new one.
//!
//! # Architecture
//!
//! - **Board**: size, squares and turn counter, with encapsulated storage
//! - **Lines**: row/column/diagonal enumeration, scoring and win detection
//! - **Move generation**: placement and relocation phases
//! - **Execution**: validates a move against the legal set and applies it
//!
//! # Example
//!
//! ```
//! use scarce_tictactoe::{Board, Move, Symbol};
//!
//! # fn example() -> Result<(), scarce_tictactoe::BoardError> {
//! let mut board = Board::new(3)?;
//! for to in [0, 1, 3, 2, 6] {
//!     assert!(board.do_move(Move::Place { to }));
//! }
//! assert_eq!(board.check_winner(), Some(Symbol::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardError, BoardInvariants, Invariant, InvariantSet, InvariantViolation, Line, Move,
    MoveRequest, Phase, Snapshot, Square, Symbol, TokenBalanceInvariant, TokenBudgetInvariant,
};

// Crate-level exports - Rules as free functions
pub use games::tictactoe::rules;
