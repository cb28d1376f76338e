//! The transparency sheet and its fold transform.

use std::collections::HashSet;
use std::fmt::{self, Display};

use tracing::debug;

use super::axis::Axis;
use super::error::OrigamiError;
use super::fold::Fold;
use super::point::Point;

/// A set of unique dots on a transparent sheet.
///
/// Every transformation reads `&self` and returns a new `Paper`; nothing is
/// mutated in place. Coincident dots collapse because the backing store is a
/// set, which is what makes [`Paper::overlay`] after a fold count merged dots
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paper {
    dots: HashSet<Point>,
}

impl Paper {
    /// Creates a blank sheet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.dots.contains(point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.dots.iter()
    }

    /// Largest coordinate per axis, or `None` for a blank sheet.
    pub fn end(&self) -> Option<Point> {
        let mut iter = self.dots.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, d| {
            Point::new(acc.x.max(d.x), acc.y.max(d.y))
        }))
    }

    /// Grid dimensions: the extent plus one in each axis.
    pub fn size(&self) -> Option<Point> {
        Some(self.end()? + Point::new(1, 1))
    }

    fn extent_on(&self, axis: Axis) -> Option<i64> {
        self.end().map(|end| end.get(axis))
    }

    /// Shifts every dot by `offset`.
    pub fn translate(&self, offset: Point) -> Paper {
        self.dots.iter().map(|&d| d + offset).collect()
    }

    /// Splits into the half before the fold line and the half past it, with
    /// the far half re-based so the row just past the line becomes zero.
    ///
    /// Dots exactly on the line belong to neither half; [`Paper::fold`]
    /// rejects them before splitting.
    pub fn split_at(&self, axis: Axis, pos: i64) -> (Paper, Paper) {
        let near: Paper = self
            .dots
            .iter()
            .copied()
            .filter(|d| d.get(axis) < pos)
            .collect();
        let far: Paper = self
            .dots
            .iter()
            .copied()
            .filter(|d| d.get(axis) > pos)
            .collect();
        (near, far.translate(-axis.offset(pos + 1)))
    }

    /// Mirrors the sheet across its own extent on `axis`.
    pub fn flip(&self, axis: Axis) -> Paper {
        match self.extent_on(axis) {
            Some(end) => self
                .dots
                .iter()
                .map(|&d| d.with(axis, end - d.get(axis)))
                .collect(),
            None => Paper::new(),
        }
    }

    /// Set union of two sheets; coincident dots count once.
    pub fn overlay(&self, other: &Paper) -> Paper {
        self.dots.union(&other.dots).copied().collect()
    }

    /// Applies one fold instruction and returns the resulting smaller sheet.
    ///
    /// The far half is mirrored back over the near half and the shorter half
    /// is shifted so both occupy the same coordinate range before the union.
    /// Folding a blank sheet is a no-op.
    ///
    /// # Errors
    ///
    /// - [`OrigamiError::InvalidFold`] when `pos` is negative or at/past the
    ///   sheet's extent on the fold axis.
    /// - [`OrigamiError::PointOnFoldLine`] when a dot sits exactly on the
    ///   fold line.
    pub fn fold(&self, fold: Fold) -> Result<Paper, OrigamiError> {
        let Fold { axis, pos } = fold;
        let Some(end) = self.extent_on(axis) else {
            return Ok(Paper::new());
        };
        if pos < 0 || pos >= end {
            return Err(OrigamiError::InvalidFold {
                axis,
                pos,
                extent: end,
            });
        }
        if let Some(&point) = self.dots.iter().find(|d| d.get(axis) == pos) {
            return Err(OrigamiError::PointOnFoldLine { point, axis, pos });
        }

        let (near, far) = self.split_at(axis, pos);
        let far = far.flip(axis);

        // Align the two halves: when one side of the line is longer than the
        // other, the shorter one ends up offset from the origin.
        let len_far = end - pos;
        let len_near = end - len_far;
        let len_diff = len_near - len_far;
        debug!(%axis, pos, len_diff, "applying fold");
        let (near, far) = if len_diff >= 1 {
            (near, far.translate(axis.offset(len_diff)))
        } else if len_diff <= -1 {
            (near.translate(-axis.offset(len_diff)), far)
        } else {
            (near, far)
        };

        Ok(near.overlay(&far))
    }
}

impl FromIterator<Point> for Paper {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            dots: iter.into_iter().collect(),
        }
    }
}

impl Display for Paper {
    /// Renders the sheet as rows of `#` and `.`, one newline-terminated row
    /// per y value. A blank sheet renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(size) = self.size() else {
            return Ok(());
        };
        for y in 0..size.y {
            for x in 0..size.x {
                let c = if self.dots.contains(&Point::new(x, y)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
