//! Constant lookup tables for clockwise quarter turns of each face.
//!
//! A clockwise turn of a face, as seen looking at that face from outside the
//! cube, is a rotation by -90 degrees about the face's outward normal using
//! the right-hand rule. Counterclockwise turns are derived from these tables:
//! the matrix is transposed and the cycle is reversed.
//!
//! Both tables are indexed by [`Face::idx()`].

use crate::Face;
use crate::Face::*;

/// Integer rotation matrix of each clockwise face turn, in row-major order.
/// The new position of a cubie is `M * p`.
pub const TURN_MATRICES: [[[i8; 3]; 3]; Face::COUNT] = [
    // L: (x, y, z) -> (x, -z, y)
    [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    // R: (x, y, z) -> (x, z, -y)
    [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
    // D: (x, y, z) -> (z, y, -x)
    [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
    // U: (x, y, z) -> (-z, y, x)
    [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
    // B: (x, y, z) -> (-y, x, z)
    [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
    // F: (x, y, z) -> (y, -x, z)
    [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
];

/// Facet directions moved by each clockwise face turn. A facet pointing in
/// one direction points in the next direction (wrapping around) after the
/// turn. The two directions along the turn axis are absent and stay put.
pub const FACET_CYCLES: [[Face; 4]; Face::COUNT] = [
    // L: up -> front -> down -> back
    [Up, Front, Down, Back],
    // R: up -> back -> down -> front
    [Up, Back, Down, Front],
    // D: front -> right -> back -> left
    [Front, Right, Back, Left],
    // U: right -> front -> left -> back
    [Right, Front, Left, Back],
    // B: right -> up -> left -> down
    [Right, Up, Left, Down],
    // F: right -> down -> left -> up
    [Right, Down, Left, Up],
];

/// Returns the transpose of a 3x3 matrix, which is its inverse if it is a
/// rotation.
pub(crate) const fn transpose(m: [[i8; 3]; 3]) -> [[i8; 3]; 3] {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}
