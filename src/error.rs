//! Error types for geometry operations.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while building or operating on geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A constructor or call received parameters that disagree with each other.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A point reference is missing, repeated, or otherwise unusable.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Two matrices share no dimension that allows them to be multiplied.
    #[error(
        "incompatible operands: {}x{} and {}x{} share no inner dimension",
        .left.0, .left.1, .right.0, .right.1
    )]
    IncompatibleOperands {
        /// Shape of the receiver as `(rows, columns)`.
        left: (usize, usize),
        /// Shape of the argument as `(rows, columns)`.
        right: (usize, usize),
    },

    /// Numeric input for which the result is undefined (zero length, zero magnitude).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Element access outside of a matrix.
    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

impl GeometryError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
}
