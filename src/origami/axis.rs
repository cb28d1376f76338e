//! The two grid axes a fold can run along.

use std::fmt::{self, Display};
use std::str::FromStr;

use super::error::OrigamiError;
use super::point::Point;

/// Axis selector for folds and per-axis arithmetic.
///
/// Replaces dynamic field access with an explicit tag: [`Point::get`] reads
/// the coordinate on an axis and [`Axis::offset`] builds a translation that
/// moves along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Builds an offset point with `value` on this axis and zero on the other.
    pub const fn offset(self, value: i64) -> Point {
        match self {
            Axis::X => Point::new(value, 0),
            Axis::Y => Point::new(0, value),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = OrigamiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            other => Err(OrigamiError::UnknownAxis {
                axis: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_along_a_single_axis() {
        assert_eq!(Axis::X.offset(3), Point::new(3, 0));
        assert_eq!(Axis::Y.offset(-2), Point::new(0, -2));
    }

    #[test]
    fn parses_axis_letters() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!(
            "z".parse::<Axis>(),
            Err(OrigamiError::UnknownAxis {
                axis: "z".to_string()
            })
        );
    }
}
