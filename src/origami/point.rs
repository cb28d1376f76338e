//! A dot position on the paper grid.

use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg};

use super::axis::Axis;

/// An integer grid coordinate.
///
/// Equality, ordering and hashing are structural over `(x, y)`. Arithmetic
/// is component-wise; translations during a fold are expressed as `point +
/// offset` with offsets built via [`Axis::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate on the given axis.
    pub const fn get(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns this point with the coordinate on `axis` replaced by `value`.
    pub const fn with(&self, axis: Axis, value: i64) -> Point {
        match axis {
            Axis::X => Point::new(value, self.y),
            Axis::Y => Point::new(self.x, value),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self * -1
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
