//! Axes, faces, and grid positions of a 3x3x3 cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use cgmath::Vector3;
use strum::VariantArray;

use crate::{Color, PuzzleError, Sign};

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        self as usize
    }
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        Self::VARIANTS.iter().copied()
    }
}

/// One of the 6 outer faces of the cube.
///
/// This also names the 6 canonical directions that a facet of a cubie can
/// point in. The discriminant is the index into [`crate::Cubie::facets`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Face {
    /// -X
    Left = 0,
    /// +X
    Right = 1,
    /// -Y
    Down = 2,
    /// +Y
    Up = 3,
    /// -Z
    Back = 4,
    /// +Z
    Front = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl TryFrom<u8> for Face {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::VARIANTS
            .get(value as usize)
            .copied()
            .ok_or_else(|| PuzzleError::InvalidArgument(format!("no face with index {value}")))
    }
}
impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Returns the face on the given axis with the given sign, or `None` if
    /// the sign is zero.
    pub const fn new(axis: Axis, sign: Sign) -> Option<Self> {
        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Neg) => Some(Face::Left),
            (Axis::X, Sign::Pos) => Some(Face::Right),
            (Axis::Y, Sign::Neg) => Some(Face::Down),
            (Axis::Y, Sign::Pos) => Some(Face::Up),
            (Axis::Z, Sign::Neg) => Some(Face::Back),
            (Axis::Z, Sign::Pos) => Some(Face::Front),
        }
    }

    /// Returns the index of the face, from 0 to 5.
    pub const fn idx(self) -> usize {
        self as usize
    }
    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Down | Face::Up => Axis::Y,
            Face::Back | Face::Front => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        match self {
            Face::Left | Face::Down | Face::Back => Sign::Neg,
            Face::Right | Face::Up | Face::Front => Sign::Pos,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Down => Face::Up,
            Face::Up => Face::Down,
            Face::Back => Face::Front,
            Face::Front => Face::Back,
        }
    }

    /// Returns the letter used for this face in move notation.
    pub const fn symbol(self) -> char {
        match self {
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Down => 'D',
            Face::Up => 'U',
            Face::Back => 'B',
            Face::Front => 'F',
        }
    }
    /// Returns the face with the given notation letter. Lowercase letters are
    /// not accepted.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }

    /// Returns the color of this face on a solved cube.
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Left => Color::Red,
            Face::Right => Color::Green,
            Face::Down => Color::Blue,
            Face::Up => Color::Yellow,
            Face::Back => Color::Orange,
            Face::Front => Color::White,
        }
    }

    /// Returns the unit vector pointing out of this face, as a position.
    pub fn unit(self) -> Position {
        let mut ret = Position::CORE;
        ret[self.axis()] = self.sign();
        ret
    }
    /// Returns the outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let mut ret = Vector3::new(0.0, 0.0, 0.0);
        ret[self.axis().int()] = self.sign().float();
        ret
    }

    /// Returns whether a position lies in the layer of this face.
    pub fn contains(self, pos: Position) -> bool {
        pos[self.axis()] == self.sign()
    }

    /// Returns an iterator over all faces, in index order.
    pub fn iter() -> impl Clone + Iterator<Item = Face> {
        Self::VARIANTS.iter().copied()
    }
}

/// Location of a cubie in the 3x3x3 grid, relative to the center of the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub [Sign; 3]);
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.ints();
        write!(f, "({x}, {y}, {z})")
    }
}
impl Index<Axis> for Position {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl Position {
    /// Position at the center of the puzzle, where there is no cubie.
    pub const CORE: Self = Self([Sign::Zero; 3]);

    /// Constructs a position from its coordinates.
    pub const fn new(x: Sign, y: Sign, z: Sign) -> Self {
        Self([x, y, z])
    }
    /// Constructs a position from integer coordinates. Returns an error if any
    /// coordinate is outside the range -1..=1.
    pub fn from_ints(coords: [i8; 3]) -> Result<Self, PuzzleError> {
        let mut ret = Self::CORE;
        for (axis, c) in Axis::iter().zip(coords) {
            ret[axis] = match c {
                -1 => Sign::Neg,
                0 => Sign::Zero,
                1 => Sign::Pos,
                _ => {
                    return Err(PuzzleError::InvalidArgument(format!(
                        "coordinate {c} out of range on {axis} axis"
                    )));
                }
            };
        }
        Ok(ret)
    }

    /// Returns the X coordinate.
    pub fn x(self) -> Sign {
        self[Axis::X]
    }
    /// Returns the Y coordinate.
    pub fn y(self) -> Sign {
        self[Axis::Y]
    }
    /// Returns the Z coordinate.
    pub fn z(self) -> Sign {
        self[Axis::Z]
    }
    /// Returns the coordinates as integers.
    pub fn ints(self) -> [i8; 3] {
        self.0.map(Sign::int)
    }
    /// Returns the coordinates as floats.
    pub fn floats(self) -> Vector3<f32> {
        Vector3::new(self.x().float(), self.y().float(), self.z().float())
    }

    /// Returns whether this is the center of the puzzle.
    pub fn is_core(self) -> bool {
        self == Self::CORE
    }
    /// Returns the faces on whose layer this position lies. A cubie at this
    /// position has a colored facet in exactly these directions.
    pub fn outer_faces(self) -> impl Iterator<Item = Face> {
        Axis::iter().filter_map(move |axis| Face::new(axis, self[axis]))
    }

    /// Returns an iterator over all 26 cubie positions (every position except
    /// the core), with X varying slowest and Z fastest.
    pub fn iter() -> impl Clone + Iterator<Item = Position> {
        itertools::iproduct!(Sign::iter(), Sign::iter(), Sign::iter())
            .map(|(x, y, z)| Position::new(x, y, z))
            .filter(|p| !p.is_core())
    }
}
