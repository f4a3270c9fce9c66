//! Sign enum.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
///
/// Also used as a single coordinate of a cubie position, which is always -1,
/// 0, or 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// Returns the sign of an integer.
    pub const fn from_signum(i: i32) -> Sign {
        if i < 0 {
            Sign::Neg
        } else if i > 0 {
            Sign::Pos
        } else {
            Sign::Zero
        }
    }
    /// Rounds a float to the nearest of -1, 0, or 1.
    pub fn round(f: f32) -> Sign {
        Sign::from_signum(f.round() as i32)
    }

    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}
