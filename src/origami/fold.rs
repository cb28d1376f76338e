//! A single fold instruction.

use std::fmt::{self, Display};

use super::axis::Axis;

/// Reflects everything past `pos` on `axis` back across the fold line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fold {
    pub axis: Axis,
    pub pos: i64,
}

impl Fold {
    pub const fn new(axis: Axis, pos: i64) -> Self {
        Self { axis, pos }
    }
}

impl Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fold along {}={}", self.axis, self.pos)
    }
}
