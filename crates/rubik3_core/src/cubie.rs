use std::fmt;

use crate::{Color, Face, Position, Turn};

/// One of the 26 small cubes that make up the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    /// Location of the cubie in the grid.
    pub position: Position,
    /// Color of the facet pointing in each direction, indexed by
    /// [`Face::idx()`], or `None` for internal facets.
    pub facets: [Option<Color>; Face::COUNT],
}
impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)?;
        for (face, color) in self.colored_facets() {
            write!(f, " {face}={}", color.letter())?;
        }
        Ok(())
    }
}
impl Cubie {
    /// Constructs the cubie that occupies `position` on a solved cube.
    pub fn solved(position: Position) -> Self {
        let mut facets = [None; Face::COUNT];
        for face in position.outer_faces() {
            facets[face.idx()] = Some(face.solved_color());
        }
        Self { position, facets }
    }

    /// Returns the color of the facet pointing in direction `face`.
    pub fn facet(&self, face: Face) -> Option<Color> {
        self.facets[face.idx()]
    }
    /// Returns the directions and colors of all colored facets.
    pub fn colored_facets(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::iter().filter_map(|face| Some((face, self.facet(face)?)))
    }
    /// Returns the number of colored facets.
    pub fn facet_count(&self) -> usize {
        self.facets.iter().flatten().count()
    }
    /// Returns what kind of piece this is.
    pub fn kind(&self) -> CubieKind {
        match self.position.outer_faces().count() {
            1 => CubieKind::Center,
            2 => CubieKind::Edge,
            _ => CubieKind::Corner,
        }
    }

    /// Returns whether the cubie is in the layer of `face`.
    pub fn is_in_layer(&self, face: Face) -> bool {
        face.contains(self.position)
    }

    /// Returns the cubie after being carried along by `turn`, whether or not
    /// it is actually in the turning layer.
    #[must_use]
    pub fn turned(&self, turn: Turn) -> Self {
        let mut facets = [None; Face::COUNT];
        for face in Face::iter() {
            facets[turn.rotate_facet(face).idx()] = self.facet(face);
        }
        Self {
            position: turn.rotate_position(self.position),
            facets,
        }
    }

    /// Returns whether the colored facets are exactly the ones facing outward
    /// from the cube.
    pub fn facets_match_position(&self) -> bool {
        Face::iter().all(|face| self.facet(face).is_some() == face.contains(self.position))
    }
}

/// Kind of cubie, determined by how many outer faces it lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubieKind {
    /// Cubie in the center of a face, with 1 colored facet.
    Center,
    /// Cubie between two faces, with 2 colored facets.
    Edge,
    /// Cubie at a corner, with 3 colored facets.
    Corner,
}
