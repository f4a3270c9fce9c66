//! State model and turn animation for a 3x3x3 twisty puzzle.
//!
//! [`CubeState`] holds the 26 cubies and applies quarter turns;
//! [`TurnAnimator`] sequences a turn from request to commit. [`Puzzle`] owns
//! one of each and is what a frontend talks to: it requests turns, ticks the
//! animation with a fixed angle step, and reads the cubies and the current
//! layer angle every frame.

mod animator;
mod colors;
mod cubie;
mod error;
mod geometry;
mod puzzle;
mod sign;
mod state;
pub mod tables;
mod turn;

#[cfg(test)]
mod tests;

pub use animator::{AnimatorState, QUARTER_TURN_DEGREES, TurnAnimator};
pub use colors::Color;
pub use cubie::{Cubie, CubieKind};
pub use error::PuzzleError;
pub use geometry::{Axis, Face, Position};
pub use puzzle::{Puzzle, SharedPuzzle};
pub use sign::Sign;
pub use state::{CUBIE_COUNT, CubeState};
pub use turn::{Turn, TurnDirection, parse_turns};

/// Re-export of `cgmath`.
pub use cgmath;
