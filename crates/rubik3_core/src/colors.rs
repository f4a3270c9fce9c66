use std::fmt;

use strum::VariantArray;

use crate::{Face, PuzzleError};

/// Sticker color.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Orange = 4,
    White = 5,
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::White => "white",
        };
        write!(f, "{name}")
    }
}
impl TryFrom<u8> for Color {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::VARIANTS
            .get(value as usize)
            .copied()
            .ok_or_else(|| PuzzleError::InvalidArgument(format!("no color with index {value}")))
    }
}
impl Color {
    /// Number of colors.
    pub const COUNT: usize = 6;

    /// Returns the index of the color, from 0 to 5.
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the face that has this color on a solved cube.
    pub fn home_face(self) -> Face {
        match self {
            Color::Red => Face::Left,
            Color::Green => Face::Right,
            Color::Blue => Face::Down,
            Color::Yellow => Face::Up,
            Color::Orange => Face::Back,
            Color::White => Face::Front,
        }
    }

    /// Returns a single uppercase letter for the color.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::White => 'W',
        }
    }

    /// Returns the RGB value of the sticker, each component from 0.0 to 1.0.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Color::Red => [1.0, 0.2, 0.2],
            Color::Green => [0.2, 0.8, 0.2],
            Color::Blue => [0.2, 0.5, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::Orange => [1.0, 0.6, 0.0],
            Color::White => [0.9, 0.9, 0.9],
        }
    }
    /// Returns the RGB value as 8-bit integers.
    pub fn rgb8(self) -> [u8; 3] {
        self.rgb().map(|c| (c * 255.0).round() as u8)
    }

    /// Returns an iterator over all colors.
    pub fn iter() -> impl Clone + Iterator<Item = Color> {
        Self::VARIANTS.iter().copied()
    }
}
