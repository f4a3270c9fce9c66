//! Quarter turns of a single face.

use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Matrix4};
use itertools::Itertools;

use crate::tables::{FACET_CYCLES, TURN_MATRICES, transpose};
use crate::{Face, Position, PuzzleError, Sign};

/// Rotation direction; clockwise or counterclockwise, as seen looking at the
/// turned face from outside the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TurnDirection {
    /// Clockwise.
    #[default]
    CW,
    /// Counterclockwise.
    CCW,
}
impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::CW => Ok(()),
            TurnDirection::CCW => write!(f, "'"),
        }
    }
}
impl TryFrom<i8> for TurnDirection {
    type Error = PuzzleError;

    /// Converts `1` to clockwise and `-1` to counterclockwise.
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TurnDirection::CW),
            -1 => Ok(TurnDirection::CCW),
            _ => Err(PuzzleError::InvalidArgument(format!(
                "turn direction must be 1 or -1, not {value}"
            ))),
        }
    }
}
impl TurnDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::CW => Self::CCW,
            Self::CCW => Self::CW,
        }
    }
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub fn sign(self) -> Sign {
        match self {
            Self::CW => Sign::Neg,
            Self::CCW => Sign::Pos,
        }
    }
}

/// Quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Turn {
    /// Face whose layer rotates.
    pub face: Face,
    /// Direction of the rotation.
    pub direction: TurnDirection,
}
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl FromStr for Turn {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidArgument(format!("invalid turn {s:?}"));
        let mut chars = s.trim().chars();
        let face = chars.next().and_then(Face::from_symbol).ok_or_else(invalid)?;
        let direction = match chars.as_str() {
            "" => TurnDirection::CW,
            "'" => TurnDirection::CCW,
            _ => return Err(invalid()),
        };
        Ok(Turn { face, direction })
    }
}
impl Turn {
    /// Constructs a turn.
    pub const fn new(face: Face, direction: TurnDirection) -> Self {
        Self { face, direction }
    }
    /// Constructs a clockwise turn.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, TurnDirection::CW)
    }
    /// Constructs a counterclockwise turn.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, TurnDirection::CCW)
    }
    /// Constructs a turn from a raw face index (0 to 5, in the order of
    /// [`Face`]) and a raw direction (`1` or `-1`).
    pub fn from_raw(face: u8, direction: i8) -> Result<Self, PuzzleError> {
        Ok(Self::new(Face::try_from(face)?, TurnDirection::try_from(direction)?))
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }

    /// Returns the integer rotation matrix of the turn, in row-major order.
    pub fn rotation_matrix(self) -> [[i8; 3]; 3] {
        let m = TURN_MATRICES[self.face.idx()];
        match self.direction {
            TurnDirection::CW => m,
            TurnDirection::CCW => transpose(m),
        }
    }
    /// Returns the 4 facet directions moved by the turn. A facet pointing in
    /// one direction points in the next direction after the turn.
    pub fn facet_cycle(self) -> [Face; 4] {
        let mut cycle = FACET_CYCLES[self.face.idx()];
        if self.direction == TurnDirection::CCW {
            cycle.reverse();
        }
        cycle
    }

    /// Returns where a position ends up after the turn, regardless of whether
    /// it is in the turning layer.
    pub fn rotate_position(self, pos: Position) -> Position {
        let m = self.rotation_matrix();
        let p = pos.ints();
        Position(m.map(|row| {
            let dot: i32 = (0..3).map(|i| row[i] as i32 * p[i] as i32).sum();
            Sign::from_signum(dot)
        }))
    }
    /// Returns the direction that a facet pointing in direction `facet`
    /// points after the turn.
    pub fn rotate_facet(self, facet: Face) -> Face {
        let cycle = self.facet_cycle();
        match cycle.iter().position(|&f| f == facet) {
            Some(i) => cycle[(i + 1) % cycle.len()],
            None => facet, // along the turn axis
        }
    }

    /// Returns the signed angle, in degrees, of the turn about the outward
    /// normal of its face once it has completed.
    pub fn full_angle(self) -> f32 {
        crate::QUARTER_TURN_DEGREES * self.direction.sign().float()
    }
    /// Returns the transformation matrix for the turning layer when it has
    /// been rotated by `angle` degrees about the outward normal of the face.
    pub fn matrix(self, angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(self.face.normal(), Deg(angle))
    }
}

/// Parses a whitespace-separated sequence of turns such as `R U R' U'`. A
/// turn suffixed with `2` is expanded into two clockwise turns.
pub fn parse_turns(s: &str) -> Result<Vec<Turn>, PuzzleError> {
    s.split_whitespace()
        .map(|word| match word.strip_suffix('2') {
            Some(base) => {
                let t = Turn::from_str(base)?;
                if t.direction == TurnDirection::CCW {
                    return Err(PuzzleError::InvalidArgument(format!("invalid turn {word:?}")));
                }
                Ok(vec![t, t])
            }
            None => Ok(vec![Turn::from_str(word)?]),
        })
        .flatten_ok()
        .collect()
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Turn;

    impl Serialize for Turn {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }
    impl<'de> Deserialize<'de> for Turn {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer)?
                .parse()
                .map_err(serde::de::Error::custom)
        }
    }
}
