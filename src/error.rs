//! Error types for sparse matrix construction, access and rendering
//!
//! Every failure here is a contract violation by the caller. Errors are
//! detected before any storage is touched, so a failed call leaves the
//! matrix exactly as it was.

use std::fmt;
use thiserror::Error;

/// Top-level error type for all matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Coordinate outside the matrix shape on read or write access
    #[error("Index out of bounds: ({row}, {col}) for a {nrow}×{ncol} matrix")]
    Index {
        row: usize,
        col: usize,
        nrow: usize,
        ncol: usize,
    },

    /// Flat sequence length does not match the requested shape
    #[error("Dimension mismatch: sequence of length {len} cannot fill a {nrow}×{ncol} matrix")]
    Dimension { len: usize, nrow: usize, ncol: usize },

    /// Operation requires a shape the matrix does not have
    #[error("Shape error in {operation}: matrix is {nrow}×{ncol}")]
    Shape {
        operation: &'static str,
        nrow: usize,
        ncol: usize,
    },

    /// Sparsity pattern violates the CRS invariants
    #[error("Invalid sparsity pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Writer failure while rendering
    #[error("Formatting failed")]
    Format(#[from] fmt::Error),
}

/// Ways a row-offset/column pair can fail to describe a valid CRS pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("rowind has length {len}, expected {expected}")]
    RowindLength { len: usize, expected: usize },

    #[error("rowind must start at 0, found {first}")]
    RowindStart { first: usize },

    #[error("rowind ends at {last} but {nnz} entries are stored")]
    RowindEnd { last: usize, nnz: usize },

    #[error("rowind decreases at row {row}: {curr} > {next}")]
    RowindDecreasing { row: usize, curr: usize, next: usize },

    #[error("{col} column indices but {values} values")]
    LengthMismatch { col: usize, values: usize },

    #[error("columns not strictly increasing in row {row} at slot {slot}")]
    UnsortedColumns { row: usize, slot: usize },

    #[error("column {col} at slot {slot} exceeds ncol = {ncol}")]
    ColumnOutOfRange { slot: usize, col: usize, ncol: usize },
}

/// Result type alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn index(row: usize, col: usize, nrow: usize, ncol: usize) -> Self {
        MatrixError::Index {
            row,
            col,
            nrow,
            ncol,
        }
    }
}
