//! Failure taxonomy for the engine.
//!
//! Two kinds exist: invalid arguments (bad disk count, bad peg index,
//! non-distinct peg triple) and illegal moves. Both are returned
//! synchronously to the immediate caller; the engine never logs, never
//! retries, and never takes down the host process. There are no other
//! failure kinds in the core because it performs no I/O and holds no
//! external resources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::peg::PegId;

/// Errors returned by the puzzle state and the solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleError {
    /// Requested disk count outside the valid domain.
    ///
    /// `min`/`max` carry the bounds of the rejecting operation:
    /// `1..=MAX_DISKS` for the state, `1..=63` for the solver.
    #[error("disk count {requested} outside supported range {min}..={max}")]
    DiskCountOutOfRange {
        /// The count that was asked for.
        requested: u8,
        /// Smallest accepted count.
        min: u8,
        /// Largest accepted count.
        max: u8,
    },

    /// Peg index outside `0..=2`.
    #[error("peg index {index} out of range (expected 0..=2)")]
    PegIndexOutOfRange {
        /// The rejected index.
        index: u8,
    },

    /// Solver called with pegs that are not a permutation of {0, 1, 2}.
    #[error("pegs ({source}, {target}, {auxiliary}) are not distinct")]
    PegsNotDistinct {
        /// Peg the full stack starts on.
        source: PegId,
        /// Peg the full stack should end on.
        target: PegId,
        /// The spare peg.
        auxiliary: PegId,
    },

    /// `apply_move` called when the move is not legal. State is unchanged.
    #[error("illegal move from {from} to {to}")]
    IllegalMove {
        /// Peg the move tried to take from.
        from: PegId,
        /// Peg the move tried to land on.
        to: PegId,
    },
}

impl PuzzleError {
    /// True for the recoverable kind: the move was rejected but the state
    /// is untouched and play continues. Everything else is a caller bug.
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, Self::IllegalMove { .. })
    }
}
