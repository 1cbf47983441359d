//! Peg identification and disk stacks.
//!
//! ## PegId
//!
//! Type-safe index into the three pegs. `SOURCE`, `AUXILIARY`, and
//! `TARGET` name the conventional roles; the engine treats the indices
//! symmetrically everywhere except the win check, which counts disks on
//! [`PegId::TARGET`].
//!
//! ## Peg
//!
//! An ordered disk stack, bottom-to-top. Mutation is crate-private:
//! callers go through [`crate::PuzzleState`], which pre-validates every
//! move so the ordering invariant never needs re-checking on reads.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{MAX_DISKS, PEG_COUNT};
use super::disk::Disk;
use super::error::PuzzleError;

/// Peg identifier, index 0..=2.
///
/// ```
/// use rust_hanoi::PegId;
///
/// assert_eq!(PegId::SOURCE.index(), 0);
/// assert_eq!(PegId::TARGET, PegId::new(2));
/// assert!(PegId::try_from(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PegId(pub u8);

impl PegId {
    /// The peg that receives the full stack on reset.
    pub const SOURCE: PegId = PegId(0);
    /// The spare peg in the conventional solve.
    pub const AUXILIARY: PegId = PegId(1);
    /// The peg the win check counts disks on.
    pub const TARGET: PegId = PegId(2);

    /// Create a peg ID from a known-good index.
    ///
    /// Panics if `index` is 3 or more; use `TryFrom<u8>` for untrusted
    /// input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < PEG_COUNT as u8, "peg index out of range");
        Self(index)
    }

    /// Get the raw peg index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all three peg IDs.
    pub fn all() -> impl Iterator<Item = PegId> {
        (0..PEG_COUNT as u8).map(PegId)
    }
}

impl TryFrom<u8> for PegId {
    type Error = PuzzleError;

    fn try_from(index: u8) -> Result<Self, PuzzleError> {
        if index < PEG_COUNT as u8 {
            Ok(Self(index))
        } else {
            Err(PuzzleError::PegIndexOutOfRange { index })
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg {}", self.0)
    }
}

// Required because `PuzzleError::PegsNotDistinct` has a field named
// `source`, which thiserror wires into `Error::source`.
impl std::error::Error for PegId {}

/// An ordered stack of disks, bottom-to-top (index 0 is the bottom).
///
/// Invariant: disk sizes strictly decrease bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    disks: SmallVec<[Disk; MAX_DISKS as usize]>,
}

impl Peg {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Disks on this peg, bottom-to-top.
    ///
    /// Read access for renderers; the stack cannot be mutated from here.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Number of disks on this peg.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check if the peg holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The top disk, or `None` for an empty peg.
    #[must_use]
    pub fn top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// Check the strictly-decreasing size ordering.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0].size() > w[1].size())
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        debug_assert!(
            self.disks.last().map_or(true, |top| top.size() > disk.size()),
            "push would break peg ordering"
        );
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}
