//! Game phase of the player to move.
//!
//! The phase is never stored on the board. It follows from how many tokens
//! the mover already has on the board compared with the side length.

use serde::{Deserialize, Serialize};

/// Which kind of move the player to move must make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Fewer tokens than the side length: new tokens are placed.
    #[display("placement")]
    Placement,
    /// Token budget used up: an existing token must be relocated.
    #[display("relocation")]
    Relocation,
}

impl Phase {
    /// Returns true while new tokens may still be placed.
    pub fn is_placement(self) -> bool {
        matches!(self, Phase::Placement)
    }
}
