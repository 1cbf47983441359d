//! Minimal-solution generator.
//!
//! [`solve`] produces the canonical shortest move sequence (length
//! `2^n − 1`) transferring `n` disks between two pegs via the third. The
//! sequence is a lazy iterator over abstract peg indices; it never reads
//! or mutates a [`crate::PuzzleState`]. The driver that paces moves and
//! feeds them into a state lives outside this crate.

pub mod sequence;

pub use sequence::{minimal_moves, solve, Solution};
