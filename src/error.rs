//! Error types for matfile operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for matfile operations
pub type Result<T> = std::result::Result<T, MatfileError>;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum MatfileError {
    /// A token in a matrix file is not a float literal
    #[error("line {line}: invalid number {token:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },

    /// A row's length differs from the first row's
    #[error("line {line}: expected {expected} columns, found {found}")]
    Shape {
        /// 1-based line number
        line: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of this row
        found: usize,
    },

    /// Operand shapes are incompatible for multiplication
    #[error("cannot multiply {}x{} by {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// (rows, cols) of the left operand
        left: (usize, usize),
        /// (rows, cols) of the right operand
        right: (usize, usize),
    },

    /// Computed result disagrees with the reference
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Failed to open, read or write a file
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stream I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a computed matrix was rejected by [`crate::verify::verify`].
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("shape {actual:?} does not match reference shape {expected:?}")]
    ShapeMismatch {
        actual: (usize, usize),
        expected: (usize, usize),
    },

    #[error(
        "{mismatches} element(s) out of tolerance, first at ({row}, {col}): got {actual}, expected {expected}"
    )]
    ValueMismatch {
        row: usize,
        col: usize,
        actual: f64,
        expected: f64,
        mismatches: usize,
    },
}

impl MatfileError {
    /// Wrap an I/O error with the path it happened on.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
