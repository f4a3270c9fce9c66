//! Unfolded text rendering of the cube.

use itertools::Itertools;
use owo_colors::OwoColorize;
use rubik3_core::{CubeState, Face, Position, Sign};

/// Width of one face in the net, including spaces between stickers.
const FACE_WIDTH: usize = 5;
/// Spaces between adjacent faces in the middle band.
const FACE_GAP: &str = "  ";

/// How to print each sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetStyle {
    /// Letter of the color, without escape codes.
    Plain,
    /// Letter of the color, drawn in that color.
    Color,
}

/// Returns the position of the cubie shown at `row` and `col` (each -1, 0, or
/// 1, starting from the top left) of `face`, looking at the face from outside
/// with the up face on top. The up face is seen with the front face below it
/// and the down face with the front face above it.
fn sticker_position(face: Face, row: i32, col: i32) -> Position {
    let s = Sign::from_signum;
    match face {
        Face::Up => Position::new(s(col), Sign::Pos, s(row)),
        Face::Down => Position::new(s(col), Sign::Neg, s(-row)),
        Face::Front => Position::new(s(col), s(-row), Sign::Pos),
        Face::Back => Position::new(s(-col), s(-row), Sign::Neg),
        Face::Right => Position::new(Sign::Pos, s(-row), s(-col)),
        Face::Left => Position::new(Sign::Neg, s(-row), s(col)),
    }
}

fn face_row(cube: &CubeState, face: Face, row: i32, style: NetStyle) -> String {
    (-1..=1)
        .map(|col| match cube.facet_color(sticker_position(face, row, col), face) {
            None => "?".to_owned(),
            Some(color) => match style {
                NetStyle::Plain => color.letter().to_string(),
                NetStyle::Color => {
                    let [r, g, b] = color.rgb8();
                    color.letter().truecolor(r, g, b).bold().to_string()
                }
            },
        })
        .join(" ")
}

/// Renders the 54 stickers as an unfolded net: the up face on top, then the
/// left, front, right, and back faces, then the down face.
pub fn render(cube: &CubeState, style: NetStyle) -> String {
    let indent = " ".repeat(FACE_WIDTH + FACE_GAP.len());
    let top = (-1..=1).map(|row| format!("{indent}{}", face_row(cube, Face::Up, row, style)));
    let band = (-1..=1).map(|row| {
        [Face::Left, Face::Front, Face::Right, Face::Back]
            .into_iter()
            .map(|face| face_row(cube, face, row, style))
            .join(FACE_GAP)
    });
    let bottom =
        (-1..=1).map(|row| format!("{indent}{}", face_row(cube, Face::Down, row, style)));
    top.chain(band).chain(bottom).map(|line| line + "\n").collect()
}
