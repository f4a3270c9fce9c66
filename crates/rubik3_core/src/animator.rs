//! Animation logic.

use crate::{CubeState, PuzzleError, Turn};

/// Number of degrees in a quarter turn.
pub const QUARTER_TURN_DEGREES: f32 = 90.0;

/// State of a [`TurnAnimator`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum AnimatorState {
    /// No turn in progress; new turns are accepted.
    #[default]
    Idle,
    /// A turn is in progress.
    Turning {
        /// Turn being animated.
        turn: Turn,
        /// Unsigned angle rotated so far, in degrees, always less than
        /// [`QUARTER_TURN_DEGREES`].
        elapsed: f32,
    },
}

/// Drives a single turn from request to commit.
///
/// Only one turn can be in progress at once, and a turn always runs to
/// completion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TurnAnimator {
    state: AnimatorState,
}
impl TurnAnimator {
    /// Constructs an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }
    /// Returns whether no turn is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == AnimatorState::Idle
    }
    /// Returns the turn in progress, if any.
    pub fn current_turn(&self) -> Option<Turn> {
        match self.state {
            AnimatorState::Idle => None,
            AnimatorState::Turning { turn, .. } => Some(turn),
        }
    }
    /// Returns the unsigned angle of the turn in progress, in degrees.
    pub fn elapsed_degrees(&self) -> f32 {
        match self.state {
            AnimatorState::Idle => 0.0,
            AnimatorState::Turning { elapsed, .. } => elapsed,
        }
    }
    /// Returns the progress of the turn in progress, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.elapsed_degrees() / QUARTER_TURN_DEGREES
    }

    /// Returns the signed angle, in degrees, by which the turning layer should
    /// be drawn rotated about the outward normal of its face. Clockwise turns
    /// have negative angles. Returns 0.0 when idle.
    pub fn current_visual_angle(&self) -> f32 {
        match self.state {
            AnimatorState::Idle => 0.0,
            AnimatorState::Turning { turn, elapsed } => elapsed * turn.direction.sign().float(),
        }
    }
    /// Same as [`Self::current_visual_angle()`], but with the progress of the
    /// turn mapped through an easing function from `[0, 1]` to `[0, 1]`.
    pub fn eased_visual_angle(&self, interpolate: impl FnOnce(f32) -> f32) -> f32 {
        match self.state {
            AnimatorState::Idle => 0.0,
            AnimatorState::Turning { turn, .. } => interpolate(self.progress()) * turn.full_angle(),
        }
    }

    /// Starts animating a turn. Returns `false` and does nothing if a turn is
    /// already in progress.
    pub fn request_turn(&mut self, turn: Turn) -> bool {
        match self.state {
            AnimatorState::Idle => {
                log::debug!("starting turn {turn}");
                self.state = AnimatorState::Turning { turn, elapsed: 0.0 };
                true
            }
            AnimatorState::Turning { turn: current, .. } => {
                log::debug!("ignoring turn {turn} because {current} is in progress");
                false
            }
        }
    }

    /// Advances the turn in progress by `delta` degrees. If this completes the
    /// turn, it is committed to `cube`, the animator becomes idle, and the
    /// turn is returned. Any overshoot past a quarter turn is discarded.
    ///
    /// Returns an error if `delta` is not a positive finite number.
    pub fn tick(&mut self, delta: f32, cube: &mut CubeState) -> Result<Option<Turn>, PuzzleError> {
        if !(delta.is_finite() && delta > 0.0) {
            return Err(PuzzleError::InvalidArgument(format!(
                "tick delta must be positive, not {delta}"
            )));
        }
        let AnimatorState::Turning { turn, elapsed } = self.state else {
            return Ok(None);
        };

        let elapsed = elapsed + delta;
        if elapsed < QUARTER_TURN_DEGREES {
            log::trace!("{turn} at {elapsed} degrees");
            self.state = AnimatorState::Turning { turn, elapsed };
            Ok(None)
        } else {
            cube.commit_turn(turn);
            self.state = AnimatorState::Idle;
            log::debug!("finished turn {turn}");
            Ok(Some(turn))
        }
    }
}
