//! # rust-hanoi
//!
//! A Tower of Hanoi puzzle engine: the authoritative disks-on-pegs state,
//! the move legality rule, win detection, and the minimal-solution
//! generator.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: no rendering, input handling, timers, or sound.
//!    A UI layer drives the engine through `PuzzleState` queries and
//!    feeds it moves; everything pixel-shaped stays on that side.
//!
//! 2. **Two Mutation Points**: `PuzzleState` changes only through `reset`
//!    and `apply_move`. Every other operation is a pure query, and a
//!    rejected move leaves the state untouched.
//!
//! 3. **Solver Is a Pure Generator**: `solve` yields peg-pair moves over
//!    abstract indices and never touches a `PuzzleState`. Drivers pull
//!    moves at whatever pace they like and may abandon the sequence at
//!    any point.
//!
//! ## Architecture
//!
//! - **Order as Invariant**: every applied move is pre-validated, so peg
//!   stacks are always strictly decreasing in size. The win check only
//!   counts disks on the target peg; it never re-derives ordering.
//!
//! - **Explicit Solution Stack**: the classical recursive solution is
//!   iterated with an explicit step stack, one move per `next()` call,
//!   restartable by calling `solve` again.
//!
//! ## Modules
//!
//! - `core`: pegs, disks, moves, errors, configuration constants
//! - `puzzle`: `PuzzleState` (state, legality, win detection)
//! - `solver`: `solve` and the lazy `Solution` iterator
//! - `score`: single-integer best-time store
//!
//! ## Example
//!
//! ```
//! use rust_hanoi::{solve, PegId, PuzzleState};
//!
//! let mut state = PuzzleState::new(3)?;
//! for mv in solve(3, PegId::SOURCE, PegId::TARGET, PegId::AUXILIARY)? {
//!     state.apply_move(mv)?;
//! }
//! assert!(state.is_solved());
//! assert_eq!(state.move_count(), 7);
//! # Ok::<(), rust_hanoi::PuzzleError>(())
//! ```

pub mod core;
pub mod puzzle;
pub mod score;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Disk, Move, Peg, PegId, PuzzleError, DEFAULT_DISKS, MAX_DISKS, MIN_DISKS, PEG_COUNT,
};

pub use crate::puzzle::PuzzleState;

pub use crate::score::BestTimeStore;

pub use crate::solver::{minimal_moves, solve, Solution};
