//! First-class move types.
//!
//! A [`Move`] is a fully specified action produced by the move generator.
//! A [`MoveRequest`] is what a caller may know before consulting the
//! generator: a source, a destination, or both.

use super::types::Board;
use serde::{Deserialize, Serialize};

/// A fully specified move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a new token on an empty square.
    Place {
        /// Destination square.
        to: usize,
    },
    /// Lift one of the mover's tokens and put it on another empty square.
    Relocate {
        /// Square currently holding the mover's token.
        from: usize,
        /// Destination square.
        to: usize,
    },
}

impl Move {
    /// Source square, present only for relocations.
    pub fn from(&self) -> Option<usize> {
        match self {
            Move::Place { .. } => None,
            Move::Relocate { from, .. } => Some(*from),
        }
    }

    /// Destination square.
    pub fn to(&self) -> usize {
        match self {
            Move::Place { to } | Move::Relocate { to, .. } => *to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to } => write!(f, "{to}"),
            Move::Relocate { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

/// A partially specified move, resolved against the legal move list.
///
/// A request matches a legal move when the sources are equal (both absent
/// counts as equal) and, if the request names a destination, the
/// destinations are equal too. The executor only applies requests that name
/// a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Source square for a relocation.
    pub from: Option<usize>,
    /// Destination square; `None` matches any destination but is never applied.
    pub to: Option<usize>,
}

impl MoveRequest {
    /// Creates a request from explicit parts.
    pub fn new(from: Option<usize>, to: Option<usize>) -> Self {
        Self { from, to }
    }

    /// Interprets a bare square index against the board.
    ///
    /// An empty square means "place here"; an occupied one means
    /// "relocate from here" with no destination, which never resolves to a
    /// legal move on its own.
    pub fn at(index: usize, board: &Board) -> Self {
        if board.is_empty(index) {
            Self::new(None, Some(index))
        } else {
            Self::new(Some(index), None)
        }
    }

    /// Returns true if `candidate` satisfies this request.
    pub fn matches(&self, candidate: &Move) -> bool {
        self.from == candidate.from() && self.to.is_none_or(|to| to == candidate.to())
    }
}

impl From<Move> for MoveRequest {
    fn from(action: Move) -> Self {
        Self::new(action.from(), Some(action.to()))
    }
}

impl std::str::FromStr for MoveRequest {
    type Err = std::num::ParseIntError;

    /// Parses `"to"` or `"from-to"`. A bare number is taken as a
    /// destination; use [`MoveRequest::at`] for the occupancy shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('-') {
            Some((from, to)) => Ok(Self::new(
                Some(from.trim().parse()?),
                Some(to.trim().parse()?),
            )),
            None => Ok(Self::new(None, Some(s.trim().parse()?))),
        }
    }
}
