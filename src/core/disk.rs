//! Disks: the entities moved between pegs.

use serde::{Deserialize, Serialize};

use super::peg::PegId;

/// A single disk.
///
/// `size` orders disks relative to each other (0 is the smallest) and
/// never changes after creation. `peg` tracks where the disk currently
/// sits and is updated by [`crate::PuzzleState`] on every applied move.
///
/// Disks are owned by the state that created them; callers only ever see
/// borrowed reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    size: u8,
    peg: PegId,
}

impl Disk {
    pub(crate) const fn new(size: u8, peg: PegId) -> Self {
        Self { size, peg }
    }

    /// Relative size. Only the ordering matters; 0 is the smallest disk.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// The peg currently holding this disk.
    #[must_use]
    pub const fn peg(&self) -> PegId {
        self.peg
    }

    pub(crate) fn set_peg(&mut self, peg: PegId) {
        self.peg = peg;
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.size)
    }
}
