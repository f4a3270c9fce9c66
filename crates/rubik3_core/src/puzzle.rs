//! Puzzle wrapper that owns the cube state and its turn animation.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{CubeState, Cubie, Face, PuzzleError, Turn, TurnAnimator};

/// Single puzzle instance, with animation.
///
/// This is the object that a frontend holds on to. It is an ordinary owned
/// value, so any number of independent puzzles may exist.
#[derive(Debug, Default, Clone)]
pub struct Puzzle {
    /// Latest committed state, not including the turn in progress.
    cube: CubeState,
    /// Turn animation state.
    animator: TurnAnimator,
    /// Number of turns committed since the last reset.
    turn_count: usize,
}
impl Puzzle {
    /// Constructs a solved, idle puzzle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the puzzle to the solved state. Returns `false` and does
    /// nothing if a turn is in progress.
    pub fn reset(&mut self) -> bool {
        if !self.is_idle() {
            log::debug!("ignoring reset during turn");
            return false;
        }
        log::debug!("resetting puzzle");
        *self = Self::new();
        true
    }

    /// Returns the committed cube state.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the turn animator.
    pub fn animator(&self) -> &TurnAnimator {
        &self.animator
    }
    /// Returns the number of turns committed since the last reset.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Starts a turn. Returns `false` and does nothing if a turn is already in
    /// progress.
    pub fn request_turn(&mut self, turn: Turn) -> bool {
        self.animator.request_turn(turn)
    }
    /// Advances the turn in progress by `delta` degrees, committing it if it
    /// completes. See [`TurnAnimator::tick()`].
    pub fn tick(&mut self, delta: f32) -> Result<Option<Turn>, PuzzleError> {
        let finished = self.animator.tick(delta, &mut self.cube)?;
        if finished.is_some() {
            self.turn_count += 1;
        }
        Ok(finished)
    }
    /// Returns whether no turn is in progress.
    pub fn is_idle(&self) -> bool {
        self.animator.is_idle()
    }
    /// Returns the turn in progress, if any.
    pub fn current_turn(&self) -> Option<Turn> {
        self.animator.current_turn()
    }
    /// Returns the signed angle of the turning layer in degrees. See
    /// [`TurnAnimator::current_visual_angle()`].
    pub fn current_visual_angle(&self) -> f32 {
        self.animator.current_visual_angle()
    }

    /// Returns the cubies in the layer of `face`.
    pub fn select_layer(&self, face: Face) -> impl '_ + Iterator<Item = &Cubie> {
        self.cube.select_layer(face)
    }
    /// Returns all cubies.
    pub fn all_cubies(&self) -> &[Cubie] {
        self.cube.all_cubies()
    }
    /// Returns every cubie along with the turn that is currently rotating it,
    /// or `None` if it should be drawn in its committed position.
    pub fn render_cubies(&self) -> impl '_ + Iterator<Item = (&Cubie, Option<Turn>)> {
        let current = self.current_turn();
        self.cube.all_cubies().iter().map(move |cubie| {
            let turn = current.filter(|t| cubie.is_in_layer(t.face));
            (cubie, turn)
        })
    }
}

/// Puzzle shared between threads.
///
/// Mutating operations take the write lock and queries take the read lock,
/// so a reader never observes a half-committed turn.
#[derive(Debug, Default, Clone)]
pub struct SharedPuzzle(Arc<RwLock<Puzzle>>);
impl From<Puzzle> for SharedPuzzle {
    fn from(puzzle: Puzzle) -> Self {
        Self(Arc::new(RwLock::new(puzzle)))
    }
}
impl SharedPuzzle {
    /// Constructs a new shared solved puzzle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the puzzle for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Puzzle> {
        self.0.read()
    }

    /// See [`Puzzle::request_turn()`].
    pub fn request_turn(&self, turn: Turn) -> bool {
        self.0.write().request_turn(turn)
    }
    /// See [`Puzzle::tick()`].
    pub fn tick(&self, delta: f32) -> Result<Option<Turn>, PuzzleError> {
        self.0.write().tick(delta)
    }
    /// See [`Puzzle::reset()`].
    pub fn reset(&self) -> bool {
        self.0.write().reset()
    }

    /// See [`Puzzle::is_idle()`].
    pub fn is_idle(&self) -> bool {
        self.0.read().is_idle()
    }
    /// See [`Puzzle::current_visual_angle()`].
    pub fn current_visual_angle(&self) -> f32 {
        self.0.read().current_visual_angle()
    }
    /// Returns a snapshot of the cubies in the layer of `face`.
    pub fn select_layer(&self, face: Face) -> Vec<Cubie> {
        self.0.read().select_layer(face).copied().collect()
    }
    /// Returns a snapshot of all cubies.
    pub fn all_cubies(&self) -> Vec<Cubie> {
        self.0.read().all_cubies().to_vec()
    }
}
