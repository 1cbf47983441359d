//! The lazy move sequence behind [`solve`].
//!
//! The classical recursion ("move n−1 aside, move the big disk, move n−1
//! back on top") is driven by an explicit step stack instead of actual
//! recursion, so pulling one move is a handful of stack operations and
//! deep disk counts cannot overflow the call stack. Dropping the iterator
//! mid-sequence is always safe; it holds nothing but plain memory.

use smallvec::SmallVec;

use crate::core::{Move, PegId, PuzzleError};

/// Largest disk count the solver accepts; keeps `2^n − 1` inside a `u64`.
const MAX_SOLVE_DISKS: u8 = 63;

/// One pending item of work on the solution stack.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Move `n` disks from `source` to `target` via `auxiliary`.
    Expand {
        n: u8,
        source: PegId,
        target: PegId,
        auxiliary: PegId,
    },
    /// Yield a single move for a disk uncovered by an earlier expansion.
    Emit(Move),
}

/// Lazy iterator over the minimal move sequence.
///
/// Yields exactly `2^n − 1` moves, each legal against the state produced
/// by applying all prior moves to a fully loaded source peg. Once
/// exhausted it keeps returning `None`; a fresh [`solve`] call always
/// starts over from the first move.
#[derive(Clone, Debug)]
pub struct Solution {
    // Depth is bounded by 2n − 1 expansions/emits, tiny for real n.
    stack: SmallVec<[Step; 16]>,
    remaining: u64,
}

impl Solution {
    /// Moves not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// Number of moves in the minimal solution for `n` disks.
///
/// `n` must be at most 63, the same bound [`solve`] enforces.
#[must_use]
pub fn minimal_moves(n: u8) -> u64 {
    (1u64 << n) - 1
}

/// Build the minimal solution sequence for `n` disks.
///
/// `source` holds the full stack, `target` is where it should end up,
/// `auxiliary` is the spare; the three must be distinct.
///
/// ```
/// use rust_hanoi::{solve, PegId};
///
/// let moves: Vec<_> = solve(2, PegId::SOURCE, PegId::TARGET, PegId::AUXILIARY)?
///     .map(|m| (m.from.index(), m.to.index()))
///     .collect();
/// assert_eq!(moves, vec![(0, 1), (0, 2), (1, 2)]);
/// # Ok::<(), rust_hanoi::PuzzleError>(())
/// ```
///
/// # Errors
///
/// `DiskCountOutOfRange` if `n` is 0 or above 63; `PegsNotDistinct` if
/// the peg triple is not a permutation of {0, 1, 2}.
pub fn solve(
    n: u8,
    source: PegId,
    target: PegId,
    auxiliary: PegId,
) -> Result<Solution, PuzzleError> {
    if n == 0 || n > MAX_SOLVE_DISKS {
        return Err(PuzzleError::DiskCountOutOfRange {
            requested: n,
            min: 1,
            max: MAX_SOLVE_DISKS,
        });
    }
    if source == target || source == auxiliary || target == auxiliary {
        return Err(PuzzleError::PegsNotDistinct {
            source,
            target,
            auxiliary,
        });
    }

    let mut stack = SmallVec::new();
    stack.push(Step::Expand {
        n,
        source,
        target,
        auxiliary,
    });
    Ok(Solution {
        stack,
        remaining: minimal_moves(n),
    })
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match self.stack.pop()? {
                Step::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Step::Expand {
                    n: 1,
                    source,
                    target,
                    ..
                } => {
                    self.remaining -= 1;
                    return Some(Move::new(source, target));
                }
                Step::Expand {
                    n,
                    source,
                    target,
                    auxiliary,
                } => {
                    // Pushed in reverse so they pop in solution order:
                    // n−1 to the spare, the uncovered disk, n−1 onto it.
                    self.stack.push(Step::Expand {
                        n: n - 1,
                        source: auxiliary,
                        target,
                        auxiliary: source,
                    });
                    self.stack.push(Step::Emit(Move::new(source, target)));
                    self.stack.push(Step::Expand {
                        n: n - 1,
                        source,
                        target: auxiliary,
                        auxiliary: target,
                    });
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Solution {}
