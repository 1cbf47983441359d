//! Move representation.
//!
//! A move names two pegs; whether it is legal depends entirely on the
//! state it is applied to. Moves are produced either by a user gesture
//! (the UI layer's drop target) or by the solver.

use serde::{Deserialize, Serialize};

use super::peg::PegId;

/// Relocate the top disk of `from` onto `to`.
///
/// Plain value, no state. A move with `from == to` is representable but
/// never legal.
///
/// ```
/// use rust_hanoi::{Move, PegId};
///
/// let mv = Move::new(PegId::SOURCE, PegId::TARGET);
/// assert_eq!(mv, Move::from((PegId::new(0), PegId::new(2))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg losing its top disk.
    pub from: PegId,
    /// Peg receiving the disk.
    pub to: PegId,
}

impl Move {
    /// Create a move between two pegs.
    #[must_use]
    pub const fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }
}

impl From<(PegId, PegId)> for Move {
    fn from((from, to): (PegId, PegId)) -> Self {
        Self::new(from, to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
