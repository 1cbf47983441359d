//! Engine configuration constants.
//!
//! The original game sizes everything off a handful of constants; the
//! engine keeps only the ones that affect puzzle semantics. Pixel sizes,
//! colors, and pacing belong to the caller.

/// Number of pegs. The puzzle is defined over exactly three.
pub const PEG_COUNT: usize = 3;

/// Smallest disk count a driving UI should offer (the "-" button floor).
///
/// The engine itself accepts any count from 1 up to [`MAX_DISKS`]; this
/// bound exists for callers, not for [`crate::PuzzleState`].
pub const MIN_DISKS: u8 = 3;

/// Largest disk count supported by [`crate::PuzzleState`].
pub const MAX_DISKS: u8 = 8;

/// Disk count a fresh game starts with.
pub const DEFAULT_DISKS: u8 = 4;
