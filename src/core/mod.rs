//! Core engine types: pegs, disks, moves, errors, configuration.
//!
//! These are the value types shared by the puzzle state and the solver.
//! Neither component reaches past this module into the other.

pub mod config;
pub mod disk;
pub mod error;
pub mod moves;
pub mod peg;

pub use config::{DEFAULT_DISKS, MAX_DISKS, MIN_DISKS, PEG_COUNT};
pub use disk::Disk;
pub use error::PuzzleError;
pub use moves::Move;
pub use peg::{Peg, PegId};
