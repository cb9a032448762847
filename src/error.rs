//! Structured error kinds surfaced to the command dispatcher.
//!
//! Every error here is recoverable and local to one user command; none is
//! fatal to the process. The dispatcher turns these into usage hints.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested grid size is outside the supported range.
    #[error("invalid grid size {requested}: must be between 1 and {max}")]
    InvalidSize { requested: usize, max: usize },

    /// Hit text does not parse as a letter followed by a number.
    #[error("malformed coordinate {input:?}: expected a letter followed by a number, e.g. \"A1\"")]
    MalformedCoordinate { input: String },

    /// Coordinate parses but falls outside the current grid.
    ///
    /// Carries the grid size so the caller can report the valid range
    /// (A1 through `<last row letter><size>`).
    #[error("coordinate {input:?} is outside the {size}x{size} grid")]
    OutOfBounds { input: String, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
