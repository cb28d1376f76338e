use thiserror::Error;

use super::axis::Axis;
use super::point::Point;

/// Errors from fold application and input parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrigamiError {
    /// The fold line lies outside the sheet on its axis.
    #[error("fold position {pos} is outside the paper (extent {extent} on axis {axis})")]
    InvalidFold { axis: Axis, pos: i64, extent: i64 },

    /// A dot sits exactly on the fold line; valid inputs never do this, so
    /// the fold is rejected rather than the dot silently dropped.
    #[error("dot {point} lies exactly on the fold line {axis}={pos}")]
    PointOnFoldLine { point: Point, axis: Axis, pos: i64 },

    #[error("unparsable dot coordinates: {line:?}")]
    InvalidPoint { line: String },

    #[error("unparsable fold instruction: {line:?}")]
    InvalidInstruction { line: String },

    #[error("unknown fold axis: {axis:?}")]
    UnknownAxis { axis: String },

    #[error("input contains no fold instructions")]
    NoFolds,
}
