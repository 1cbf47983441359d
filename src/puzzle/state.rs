//! Authoritative puzzle state.
//!
//! ## PuzzleState
//!
//! Owns the three pegs and every disk on them. Mutation happens through
//! exactly two operations, `reset` and `apply_move`; everything else is a
//! pure query. Because `apply_move` validates legality before touching
//! anything, two invariants hold in every reachable state:
//!
//! - conservation: each disk sits on exactly one peg, and the total count
//!   equals the disk count the state was reset with;
//! - ordering: sizes strictly decrease bottom-to-top on every peg.
//!
//! The win check leans on the second invariant: all disks on the target
//! peg implies they are in order, so `is_solved` only counts them.

use serde::{Deserialize, Serialize};

use crate::core::{Disk, Move, Peg, PegId, PuzzleError, MAX_DISKS};

/// The disks-on-pegs state machine.
///
/// ```
/// use rust_hanoi::{Move, PegId, PuzzleState};
///
/// let mut state = PuzzleState::new(3)?;
/// state.apply_move(Move::new(PegId::SOURCE, PegId::TARGET))?;
///
/// assert_eq!(state.move_count(), 1);
/// assert_eq!(state.top_disk(PegId::TARGET).map(|d| d.size()), Some(0));
/// # Ok::<(), rust_hanoi::PuzzleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pegs: [Peg; 3],
    disk_count: u8,
    move_count: u32,
    solved: bool,
}

impl PuzzleState {
    /// Create a state with `disk_count` disks stacked on peg 0.
    ///
    /// # Errors
    ///
    /// `DiskCountOutOfRange` if `disk_count` is 0 or above [`MAX_DISKS`].
    pub fn new(disk_count: u8) -> Result<Self, PuzzleError> {
        let mut state = Self {
            pegs: [Peg::new(), Peg::new(), Peg::new()],
            disk_count: 0,
            move_count: 0,
            solved: false,
        };
        state.reset(disk_count)?;
        Ok(state)
    }

    /// Rebuild the puzzle with `disk_count` fresh disks.
    ///
    /// Peg 0 receives disks sized `disk_count - 1` (bottom) down to 0
    /// (top); pegs 1 and 2 end up empty; the move counter and solved flag
    /// reset.
    ///
    /// # Errors
    ///
    /// `DiskCountOutOfRange` if `disk_count` is 0 or above [`MAX_DISKS`];
    /// the state is left unchanged.
    pub fn reset(&mut self, disk_count: u8) -> Result<(), PuzzleError> {
        if disk_count == 0 || disk_count > MAX_DISKS {
            return Err(PuzzleError::DiskCountOutOfRange {
                requested: disk_count,
                min: 1,
                max: MAX_DISKS,
            });
        }

        for peg in &mut self.pegs {
            peg.clear();
        }
        for size in (0..disk_count).rev() {
            self.pegs[PegId::SOURCE.index()].push(Disk::new(size, PegId::SOURCE));
        }

        self.disk_count = disk_count;
        self.move_count = 0;
        self.solved = false;
        Ok(())
    }

    /// Number of disks in play.
    #[must_use]
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Read access to a full peg stack (for rendering).
    #[must_use]
    pub fn peg(&self, peg: PegId) -> &Peg {
        &self.pegs[peg.index()]
    }

    /// The disk at the top of `peg`, or `None` if the peg is empty.
    #[must_use]
    pub fn top_disk(&self, peg: PegId) -> Option<&Disk> {
        self.pegs[peg.index()].top()
    }

    /// Check whether `mv` is legal right now.
    ///
    /// Legal means: the source peg has a disk, and the destination is
    /// either empty or topped by a strictly larger disk. A move from a
    /// peg to itself is never legal.
    #[must_use]
    pub fn can_move(&self, mv: Move) -> bool {
        if mv.from == mv.to {
            return false;
        }
        let Some(moving) = self.top_disk(mv.from) else {
            return false;
        };
        match self.top_disk(mv.to) {
            Some(resting) => resting.size() > moving.size(),
            None => true,
        }
    }

    /// Pop the top disk of `mv.from` and push it onto `mv.to`.
    ///
    /// Increments the move counter and re-evaluates the solved flag.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if [`Self::can_move`] is false. The failure is
    /// atomic: pegs, counters, and the solved flag are exactly as before
    /// the call.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), PuzzleError> {
        if !self.can_move(mv) {
            return Err(PuzzleError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        let Some(mut disk) = self.pegs[mv.from.index()].pop() else {
            // can_move just confirmed the source is non-empty
            return Err(PuzzleError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        };
        disk.set_peg(mv.to);
        self.pegs[mv.to.index()].push(disk);

        self.move_count += 1;
        self.solved = self.pegs[PegId::TARGET.index()].len() == usize::from(self.disk_count);
        Ok(())
    }

    /// True iff every disk sits on [`PegId::TARGET`].
    ///
    /// Ordering needs no re-check here: the legality rule keeps every peg
    /// well-ordered, so a full target peg is necessarily in order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: u8, to: u8) -> Move {
        Move::new(PegId::new(from), PegId::new(to))
    }

    #[test]
    fn test_new_stacks_source_peg() {
        let state = PuzzleState::new(4).unwrap();

        let sizes: Vec<_> = state
            .peg(PegId::SOURCE)
            .disks()
            .iter()
            .map(Disk::size)
            .collect();
        assert_eq!(sizes, vec![3, 2, 1, 0]); // largest at the bottom

        assert!(state.peg(PegId::AUXILIARY).is_empty());
        assert!(state.peg(PegId::TARGET).is_empty());
        assert_eq!(state.move_count(), 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            PuzzleState::new(0),
            Err(PuzzleError::DiskCountOutOfRange {
                requested: 0,
                min: 1,
                max: MAX_DISKS,
            })
        );
        assert_eq!(
            PuzzleState::new(MAX_DISKS + 1),
            Err(PuzzleError::DiskCountOutOfRange {
                requested: MAX_DISKS + 1,
                min: 1,
                max: MAX_DISKS,
            })
        );
    }

    #[test]
    fn test_reset_failure_leaves_state_unchanged() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(mv(0, 2)).unwrap();
        let before = state.clone();

        assert!(state.reset(9).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(mv(0, 2)).unwrap();
        state.apply_move(mv(0, 1)).unwrap();

        state.reset(5).unwrap();

        assert_eq!(state.disk_count(), 5);
        assert_eq!(state.peg(PegId::SOURCE).len(), 5);
        assert!(state.peg(PegId::TARGET).is_empty());
        assert_eq!(state.move_count(), 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn test_top_disk() {
        let state = PuzzleState::new(3).unwrap();
        assert_eq!(state.top_disk(PegId::SOURCE).map(Disk::size), Some(0));
        assert_eq!(state.top_disk(PegId::AUXILIARY), None);
        assert_eq!(state.top_disk(PegId::TARGET), None);
    }

    #[test]
    fn test_can_move_rules() {
        let mut state = PuzzleState::new(3).unwrap();

        // Same peg is never a move.
        assert!(!state.can_move(mv(0, 0)));
        // Empty source.
        assert!(!state.can_move(mv(1, 0)));
        // Onto an empty peg.
        assert!(state.can_move(mv(0, 1)));
        assert!(state.can_move(mv(0, 2)));

        state.apply_move(mv(0, 2)).unwrap();
        // Size-1 disk cannot land on the size-0 disk.
        assert!(!state.can_move(mv(0, 2)));
        // The size-0 disk can come back onto size 1.
        assert!(state.can_move(mv(2, 0)));
    }

    #[test]
    fn test_apply_move_updates_disk_peg() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(mv(0, 2)).unwrap();

        let top = state.top_disk(PegId::TARGET).copied().unwrap();
        assert_eq!(top.size(), 0);
        assert_eq!(top.peg(), PegId::TARGET);
    }

    #[test]
    fn test_repeated_move_rejected() {
        let mut state = PuzzleState::new(3).unwrap();

        state.apply_move(mv(0, 2)).unwrap();
        // Peg 0 now tops out at size 1, peg 2 at size 0: not legal again.
        assert_eq!(
            state.apply_move(mv(0, 2)),
            Err(PuzzleError::IllegalMove {
                from: PegId::SOURCE,
                to: PegId::TARGET,
            })
        );
    }

    #[test]
    fn test_illegal_move_is_atomic() {
        let mut state = PuzzleState::new(4).unwrap();
        state.apply_move(mv(0, 1)).unwrap();
        let before = state.clone();

        let err = state.apply_move(mv(0, 1)).unwrap_err();
        assert!(err.is_illegal_move());
        assert_eq!(state, before);
    }

    #[test]
    fn test_conservation_across_moves() {
        let mut state = PuzzleState::new(4).unwrap();
        for mv in [mv(0, 1), mv(0, 2), mv(1, 2), mv(0, 1)] {
            state.apply_move(mv).unwrap();
            let total: usize = PegId::all().map(|p| state.peg(p).len()).sum();
            assert_eq!(total, 4);
            assert!(PegId::all().all(|p| state.peg(p).is_well_ordered()));
        }
    }

    #[test]
    fn test_single_disk_win() {
        let mut state = PuzzleState::new(1).unwrap();
        assert!(!state.is_solved());

        state.apply_move(mv(0, 2)).unwrap();
        assert!(state.is_solved());
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_solved_flag_clears_when_disks_leave_target() {
        let mut state = PuzzleState::new(1).unwrap();
        state.apply_move(mv(0, 2)).unwrap();
        assert!(state.is_solved());

        state.apply_move(mv(2, 1)).unwrap();
        assert!(!state.is_solved());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(mv(0, 2)).unwrap();

        let first_top = state.top_disk(PegId::TARGET).copied();
        for _ in 0..5 {
            assert_eq!(state.top_disk(PegId::TARGET).copied(), first_top);
            assert!(!state.is_solved());
            assert_eq!(state.move_count(), 1);
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(mv(0, 2)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PuzzleState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
