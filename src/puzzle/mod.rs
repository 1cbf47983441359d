//! The puzzle state machine: pegs, legality, win detection.

pub mod state;

pub use state::PuzzleState;
