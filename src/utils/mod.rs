//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs, to_sprs};

use rayon::prelude::*;

use crate::error::PatternError;

/// Computes an exclusive prefix sum (scan) for a vector
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Row offsets and columns of a fully stored nrow×ncol pattern
pub fn dense_pattern(nrow: usize, ncol: usize) -> (Vec<usize>, Vec<usize>) {
    let rowind = exclusive_scan(&vec![ncol; nrow]);
    let col = (0..nrow).flat_map(|_| 0..ncol).collect();
    (rowind, col)
}

/// Checks that `rowind`/`col` describe a valid CRS pattern for an
/// nrow×ncol matrix holding `nnz` values
///
/// Rows are checked in parallel. When several rows are broken, the error
/// for the lowest row is reported.
pub fn validate_pattern(
    nrow: usize,
    ncol: usize,
    rowind: &[usize],
    col: &[usize],
    nnz: usize,
) -> Result<(), PatternError> {
    if rowind.len() != nrow + 1 {
        return Err(PatternError::RowindLength {
            len: rowind.len(),
            expected: nrow + 1,
        });
    }
    if col.len() != nnz {
        return Err(PatternError::LengthMismatch {
            col: col.len(),
            values: nnz,
        });
    }
    if rowind[0] != 0 {
        return Err(PatternError::RowindStart { first: rowind[0] });
    }
    if rowind[nrow] != nnz {
        return Err(PatternError::RowindEnd {
            last: rowind[nrow],
            nnz,
        });
    }
    if let Some(row) = rowind.windows(2).position(|w| w[0] > w[1]) {
        return Err(PatternError::RowindDecreasing {
            row,
            curr: rowind[row],
            next: rowind[row + 1],
        });
    }

    let broken = (0..nrow)
        .into_par_iter()
        .filter_map(|row| check_row(row, ncol, rowind[row], &col[rowind[row]..rowind[row + 1]]).err())
        .find_first(|_| true);

    match broken {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_row(row: usize, ncol: usize, offset: usize, cols: &[usize]) -> Result<(), PatternError> {
    for (k, &c) in cols.iter().enumerate() {
        if c >= ncol {
            return Err(PatternError::ColumnOutOfRange {
                slot: offset + k,
                col: c,
                ncol,
            });
        }
        if k > 0 && cols[k - 1] >= c {
            return Err(PatternError::UnsortedColumns {
                row,
                slot: offset + k,
            });
        }
    }
    Ok(())
}
