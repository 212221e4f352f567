//! Game rules for scarce-token tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from board
//! storage. Only [`execute`] mutates, and only through `&mut Board`.

pub mod execute;
pub mod lines;
pub mod movegen;
pub mod win;

pub use execute::{do_move, do_request, resolve};
pub use lines::{Line, get_score, lines, score_line};
pub use movegen::valid_moves;
pub use win::check_winner;
