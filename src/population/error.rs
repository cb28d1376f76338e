use thiserror::Error;

/// Errors from countdown-list parsing and histogram construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PopulationError {
    #[error("countdown value {value} is outside 0..=8")]
    InvalidTimer { value: i64 },

    #[error("unparsable countdown value: {token:?}")]
    UnparsableTimer { token: String },

    #[error("input contains no countdown values")]
    EmptyInput,
}
