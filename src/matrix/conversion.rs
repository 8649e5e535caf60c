//! Construction from flat sequences, raw parts, triplets and dense arrays

use ndarray::{Array2, ArrayView2};
use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::SparseMatrix;
use crate::utils::{dense_pattern, exclusive_scan, validate_pattern};

impl<T: Copy + Zero> SparseMatrix<T> {
    /// Creates a dense column vector of shape (len, 1) from a flat sequence
    pub fn from_vec<A: Into<T>>(x: Vec<A>) -> Self {
        let nrow = x.len();
        Self::dense_from_values(nrow, 1, x)
    }

    /// Creates a dense n×m matrix from a flat sequence in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Dimension`] if `x.len() != nrow * ncol`.
    pub fn from_vec_with_shape<A: Into<T>>(x: Vec<A>, nrow: usize, ncol: usize) -> MatrixResult<Self> {
        if nrow.checked_mul(ncol) != Some(x.len()) {
            return Err(MatrixError::Dimension {
                len: x.len(),
                nrow,
                ncol,
            });
        }
        Ok(Self::dense_from_values(nrow, ncol, x))
    }

    fn dense_from_values<A: Into<T>>(nrow: usize, ncol: usize, x: Vec<A>) -> Self {
        let (rowind, col) = dense_pattern(nrow, ncol);
        let values = x.into_iter().map(Into::into).collect();
        Self::from_raw_parts(nrow, ncol, rowind, col, values)
    }

    /// Creates a matrix from CRS arrays, validating the pattern
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Pattern`] if the arrays are inconsistent.
    pub fn from_parts(
        nrow: usize,
        ncol: usize,
        rowind: Vec<usize>,
        col: Vec<usize>,
        values: Vec<T>,
    ) -> MatrixResult<Self> {
        validate_pattern(nrow, ncol, &rowind, &col, values.len())?;
        Ok(Self::from_raw_parts(nrow, ncol, rowind, col, values))
    }

    /// Creates a matrix from (row, col, value) triplets in any order
    ///
    /// When a coordinate appears more than once the last triplet wins.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Index`] for the first triplet outside the shape.
    pub fn from_triplets(nrow: usize, ncol: usize, triplets: &[(usize, usize, T)]) -> MatrixResult<Self> {
        if let Some(&(i, j, _)) = triplets.iter().find(|&&(i, j, _)| i >= nrow || j >= ncol) {
            return Err(MatrixError::index(i, j, nrow, ncol));
        }

        // Stable sort keeps duplicates in input order
        let mut order: Vec<usize> = (0..triplets.len()).collect();
        order.sort_by_key(|&k| (triplets[k].0, triplets[k].1));

        let mut row_counts = vec![0; nrow];
        let mut col = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());
        let mut last = None;

        for k in order {
            let (i, j, v) = triplets[k];
            if last == Some((i, j)) {
                if let Some(slot) = values.last_mut() {
                    *slot = v;
                }
                continue;
            }
            row_counts[i] += 1;
            col.push(j);
            values.push(v);
            last = Some((i, j));
        }

        let rowind = exclusive_scan(&row_counts);
        Ok(Self::from_raw_parts(nrow, ncol, rowind, col, values))
    }

    /// Creates a fully stored matrix from a dense array
    pub fn from_dense(array: ArrayView2<'_, T>) -> Self {
        let (nrow, ncol) = array.dim();
        let values: Vec<T> = array.iter().copied().collect();
        Self::dense_from_values(nrow, ncol, values)
    }

    /// Expands the matrix into a dense array, absent entries as zero
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem(self.shape(), T::zero());
        for (i, j, &val) in self.iter() {
            dense[[i, j]] = val;
        }
        dense
    }
}
