use thiserror::Error;

/// Error produced by puzzle operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Face, direction, tick delta, or notation outside the accepted range
    ///
    /// This indicates a bug in the caller rather than a recoverable condition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Puzzle state is inconsistent
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
