//! Authoritative state of the 26 cubies.

use std::collections::HashSet;

use crate::{Color, Cubie, Face, Position, PuzzleError, Turn};

/// Number of cubies in a 3x3x3 puzzle (27 minus the invisible core).
pub const CUBIE_COUNT: usize = 26;

/// State of a 3x3x3 puzzle cube.
///
/// Each slot of the cubie array always holds the same physical cubie; turns
/// only change its position and facet colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    cubies: [Cubie; CUBIE_COUNT],
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let mut positions = Position::iter();
        Self {
            cubies: std::array::from_fn(|_| {
                Cubie::solved(positions.next().unwrap_or(Position::CORE))
            }),
        }
    }

    /// Rebuilds all cubies in the solved configuration.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns all cubies.
    pub fn all_cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubies in the layer of `face`.
    pub fn select_layer(&self, face: Face) -> impl '_ + Iterator<Item = &Cubie> {
        self.cubies.iter().filter(move |c| c.is_in_layer(face))
    }
    /// Returns the cubie at `position`, or `None` if `position` is the core.
    pub fn cubie_at(&self, position: Position) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == position)
    }
    /// Returns the color of the sticker facing `face` on the cubie at
    /// `position`.
    pub fn facet_color(&self, position: Position, face: Face) -> Option<Color> {
        self.cubie_at(position)?.facet(face)
    }

    /// Applies a quarter turn.
    ///
    /// The new state of every cubie is computed from the old state before any
    /// of them is replaced.
    pub fn commit_turn(&mut self, turn: Turn) {
        let old = self.cubies;
        self.cubies = old.map(|c| if c.is_in_layer(turn.face) { c.turned(turn) } else { c });
        log::trace!("committed {turn}");
    }
    /// Applies a sequence of turns.
    pub fn commit_turns(&mut self, turns: impl IntoIterator<Item = Turn>) {
        for turn in turns {
            self.commit_turn(turn);
        }
    }

    /// Returns the number of facets of each color, indexed by
    /// [`Color::idx()`].
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut ret = [0; Color::COUNT];
        for color in self.cubies.iter().flat_map(|c| c.facets).flatten() {
            ret[color.idx()] += 1;
        }
        ret
    }

    /// Returns whether every face of the cube is a single color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let mut colors = self.select_layer(face).filter_map(|c| c.facet(face));
            let first = colors.next();
            colors.all(|c| Some(c) == first)
        })
    }

    /// Checks that the cube is physically consistent: 26 cubies at distinct
    /// non-core positions, colored facets exactly on outward directions, and 9
    /// facets of each color.
    pub fn check_invariants(&self) -> Result<(), PuzzleError> {
        let mut seen = HashSet::new();
        for cubie in &self.cubies {
            if cubie.position.is_core() {
                return Err(PuzzleError::InvariantViolation(
                    "cubie at core position".to_owned(),
                ));
            }
            if !seen.insert(cubie.position) {
                return Err(PuzzleError::InvariantViolation(format!(
                    "multiple cubies at {}",
                    cubie.position,
                )));
            }
            if !cubie.facets_match_position() {
                return Err(PuzzleError::InvariantViolation(format!(
                    "facets of cubie {cubie} do not match its position",
                )));
            }
        }
        for color in Color::iter() {
            let count = self.color_counts()[color.idx()];
            if count != 9 {
                return Err(PuzzleError::InvariantViolation(format!(
                    "{count} facets are {color}",
                )));
            }
        }
        Ok(())
    }
}
