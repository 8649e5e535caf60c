//! Mutable Compressed Row Storage (CRS) matrix with lazy fill-in

use std::cmp::Ordering;
use std::fmt;

use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::config::StorageConfig;
use crate::utils::{dense_pattern, validate_pattern};

/// A sparse matrix in Compressed Row Storage (CRS) format whose pattern
/// grows on first write to an absent coordinate
///
/// The matrix is stored using three arrays:
/// - rowind: Array of size nrow + 1, rowind[i] is the offset of row i
/// - col: Array of size nnz containing the column of each stored entry
/// - values: Array of size nnz containing the stored values
///
/// Within a row, columns are strictly increasing. Coordinates without a
/// stored entry read as `T::zero()`.
#[derive(Clone)]
pub struct SparseMatrix<T> {
    nrow: usize,
    ncol: usize,

    /// Stored values, positionally matched with `col`
    values: Vec<T>,

    /// Column of each stored entry
    col: Vec<usize>,

    /// Row offsets (size: nrow + 1), rowind[nrow] == nnz
    rowind: Vec<usize>,

    config: StorageConfig,
    fill_in_warned: bool,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Zero,
{
    /// Creates an empty 0×0 matrix
    pub fn new() -> Self {
        Self::zeros(0, 0)
    }

    /// Creates an n×m matrix with no stored entries
    pub fn zeros(nrow: usize, ncol: usize) -> Self {
        Self::with_config(nrow, ncol, StorageConfig::default())
    }

    /// Creates an n×m matrix with no stored entries, using `config` for
    /// the backing storage
    pub fn with_config(nrow: usize, ncol: usize, config: StorageConfig) -> Self {
        Self {
            nrow,
            ncol,
            values: Vec::with_capacity(config.nnz_capacity),
            col: Vec::with_capacity(config.nnz_capacity),
            rowind: vec![0; nrow + 1],
            config,
            fill_in_warned: false,
        }
    }

    /// Creates an n×m matrix with every coordinate stored and set to `val`
    ///
    /// Entries are stored even when `val` is zero.
    pub fn dense(nrow: usize, ncol: usize, val: T) -> Self {
        let mut matrix = Self::zeros(0, 0);
        matrix.make_dense(nrow, ncol, val);
        matrix
    }

    /// Promotes a single value to a 1×1 matrix
    pub fn from_scalar(val: T) -> Self {
        Self::dense(1, 1, val)
    }

    /// Builds a matrix from already-assembled parts without validation.
    /// Callers guarantee the CRS invariants.
    pub(crate) fn from_raw_parts(
        nrow: usize,
        ncol: usize,
        rowind: Vec<usize>,
        col: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            nrow,
            ncol,
            values,
            col,
            rowind,
            config: StorageConfig::default(),
            fill_in_warned: false,
        }
    }

    /// Discards all entries and makes this a dense n×m matrix filled with `val`
    pub fn make_dense(&mut self, nrow: usize, ncol: usize, val: T) {
        let (rowind, col) = dense_pattern(nrow, ncol);
        self.nrow = nrow;
        self.ncol = ncol;
        self.values.clear();
        self.values.resize(nrow * ncol, val);
        self.col = col;
        self.rowind = rowind;
        self.fill_in_warned = false;
        log::debug!("re-initialised as dense {}×{} matrix", nrow, ncol);
    }

    /// Discards all entries and makes this an n×m matrix with no stored entries
    pub fn make_empty(&mut self, nrow: usize, ncol: usize) {
        self.nrow = nrow;
        self.ncol = ncol;
        self.values.clear();
        self.col.clear();
        self.rowind.clear();
        self.rowind.resize(nrow + 1, 0);
        self.fill_in_warned = false;
        log::debug!("re-initialised as empty {}×{} matrix", nrow, ncol);
    }

    /// Returns the value at (i, j), or zero when nothing is stored there
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Index`] if (i, j) lies outside the shape.
    pub fn get(&self, i: usize, j: usize) -> MatrixResult<T> {
        self.check_bounds(i, j)?;
        Ok(match self.locate(i, j) {
            Ok(ind) => self.values[ind],
            Err(_) => T::zero(),
        })
    }

    /// Returns a mutable reference to the entry at (i, j), storing a zero
    /// entry there first if the coordinate was absent
    ///
    /// The reference borrows the matrix mutably, so it cannot outlive the
    /// next insertion or re-initialisation that may move the storage.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Index`] if (i, j) lies outside the shape.
    /// Nothing is inserted in that case.
    pub fn get_or_insert(&mut self, i: usize, j: usize) -> MatrixResult<&mut T> {
        self.check_bounds(i, j)?;
        let ind = match self.locate(i, j) {
            Ok(ind) => ind,
            Err(ind) => {
                self.insert_at(i, j, ind);
                ind
            }
        };
        Ok(&mut self.values[ind])
    }

    /// Stores `val` at (i, j)
    pub fn set(&mut self, i: usize, j: usize, val: T) -> MatrixResult<()> {
        *self.get_or_insert(i, j)? = val;
        Ok(())
    }

    fn check_bounds(&self, i: usize, j: usize) -> MatrixResult<()> {
        if i >= self.nrow || j >= self.ncol {
            return Err(MatrixError::index(i, j, self.nrow, self.ncol));
        }
        Ok(())
    }

    /// Scans row i for column j. `Ok(ind)` is the slot holding j,
    /// `Err(ind)` the slot where j would have to be inserted.
    fn locate(&self, i: usize, j: usize) -> Result<usize, usize> {
        let end = self.rowind[i + 1];
        for ind in self.rowind[i]..end {
            match self.col[ind].cmp(&j) {
                Ordering::Equal => return Ok(ind),
                Ordering::Greater => return Err(ind),
                Ordering::Less => {}
            }
        }
        Err(end)
    }

    fn insert_at(&mut self, i: usize, j: usize, ind: usize) {
        self.values.insert(ind, T::zero());
        self.col.insert(ind, j);
        for offset in &mut self.rowind[i + 1..] {
            *offset += 1;
        }
        log::trace!("fill-in at ({}, {}), slot {}", i, j, ind);

        if let Some(threshold) = self.config.fill_in_warn_nnz {
            if !self.fill_in_warned && self.nnz() > threshold {
                self.fill_in_warned = true;
                log::warn!(
                    "fill-in has grown a {}×{} matrix past {} stored entries; \
                     each further insertion shifts the storage tail",
                    self.nrow,
                    self.ncol,
                    threshold
                );
            }
        }
    }

    /// Returns an iterator over the stored entries in row i
    ///
    /// Each item is a tuple (col, value), in increasing column order.
    pub fn row_iter(&self, i: usize) -> MatrixResult<impl Iterator<Item = (usize, &T)> + '_> {
        if i >= self.nrow {
            return Err(MatrixError::index(i, 0, self.nrow, self.ncol));
        }
        let range = self.rowind[i]..self.rowind[i + 1];
        Ok(self.col[range.clone()]
            .iter()
            .zip(&self.values[range])
            .map(|(&col, val)| (col, val)))
    }

    /// Returns an iterator over all stored entries as (row, col, value),
    /// in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.nrow).flat_map(move |i| {
            (self.rowind[i]..self.rowind[i + 1]).map(move |k| (i, self.col[k], &self.values[k]))
        })
    }

    /// Validates the CRS invariants
    ///
    /// Never called implicitly. Use it after editing the pattern through
    /// [`col_mut`](Self::col_mut) or [`rowind_mut`](Self::rowind_mut).
    pub fn check_invariants(&self) -> MatrixResult<()> {
        validate_pattern(self.nrow, self.ncol, &self.rowind, &self.col, self.values.len())?;
        Ok(())
    }
}

impl<T> SparseMatrix<T> {
    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of elements, nrow * ncol
    pub fn numel(&self) -> usize {
        self.nrow * self.ncol
    }

    /// Returns the number of rows
    pub fn size1(&self) -> usize {
        self.nrow
    }

    /// Returns the number of columns
    pub fn size2(&self) -> usize {
        self.ncol
    }

    /// Returns (nrow, ncol)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }

    /// True when the matrix has no elements
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// True for a 1×1 matrix
    pub fn is_scalar(&self) -> bool {
        self.nrow == 1 && self.ncol == 1
    }

    /// True when the matrix has exactly one column
    ///
    /// A 1×n row with n > 1 is not a vector under this classification.
    pub fn is_vector(&self) -> bool {
        self.ncol == 1
    }

    /// Stored values, in storage order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Stored values as a mutable slice; the pattern cannot change through it
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Column of every stored entry
    pub fn col(&self) -> &[usize] {
        &self.col
    }

    /// Row offsets into the stored entries
    pub fn rowind(&self) -> &[usize] {
        &self.rowind
    }

    /// Mutable column array. The caller is responsible for keeping the
    /// CRS invariants; nothing is re-validated afterwards.
    pub fn col_mut(&mut self) -> &mut Vec<usize> {
        &mut self.col
    }

    /// Mutable row-offset array. The caller is responsible for keeping the
    /// CRS invariants; nothing is re-validated afterwards.
    pub fn rowind_mut(&mut self) -> &mut Vec<usize> {
        &mut self.rowind
    }

    /// Column of stored entry `el`
    pub fn col_at(&self, el: usize) -> Option<usize> {
        self.col.get(el).copied()
    }

    /// Offset of row `row`
    pub fn rowind_at(&self, row: usize) -> Option<usize> {
        self.rowind.get(row).copied()
    }

    /// Storage configuration this matrix was created with
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl<T: Copy + Zero> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nrow == other.nrow
            && self.ncol == other.ncol
            && self.rowind == other.rowind
            && self.col == other.col
            && self.values == other.values
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.nrow, self.ncol)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.nrow);

        if max_rows_to_print > 0 && self.rowind.len() > max_rows_to_print {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.rowind[i];
                let end = self.rowind[i + 1].min(self.values.len()).min(self.col.len());

                if start >= end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for k in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col[k], self.values[k])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.nrow > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.nrow - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let matrix = SparseMatrix::<f64>::zeros(3, 4);

        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.rowind(), &[0, 0, 0, 0]);
        assert!(matrix.col().is_empty());
    }

    #[test]
    fn test_dense() {
        let matrix = SparseMatrix::dense(2, 3, 0.0);

        assert_eq!(matrix.nnz(), 6);
        assert_eq!(matrix.rowind(), &[0, 3, 6]);
        assert_eq!(matrix.col(), &[0, 1, 2, 0, 1, 2]);
        assert_eq!(matrix.values(), &[0.0; 6]);
    }

    #[test]
    fn test_get_absent_is_zero() {
        let mut matrix = SparseMatrix::<i32>::zeros(2, 5);
        matrix.set(0, 3, 9).unwrap();

        assert_eq!(matrix.get(0, 3).unwrap(), 9);
        assert_eq!(matrix.get(0, 1).unwrap(), 0);
        assert_eq!(matrix.get(0, 4).unwrap(), 0);
        assert_eq!(matrix.get(1, 3).unwrap(), 0);
    }

    #[test]
    fn test_insert_keeps_row_sorted() {
        let mut matrix = SparseMatrix::<i32>::zeros(3, 6);
        matrix.set(1, 4, 1).unwrap();
        matrix.set(1, 0, 2).unwrap();
        matrix.set(1, 2, 3).unwrap();
        matrix.set(0, 5, 4).unwrap();
        matrix.set(2, 1, 5).unwrap();

        assert_eq!(matrix.rowind(), &[0, 1, 4, 5]);
        assert_eq!(matrix.col(), &[5, 0, 2, 4, 1]);
        assert_eq!(matrix.values(), &[4, 2, 3, 1, 5]);
        assert!(matrix.check_invariants().is_ok());
    }

    #[test]
    fn test_get_or_insert_existing_slot() {
        let mut matrix = SparseMatrix::dense(2, 2, 1);
        *matrix.get_or_insert(1, 0).unwrap() += 4;

        assert_eq!(matrix.nnz(), 4);
        assert_eq!(matrix.get(1, 0).unwrap(), 5);
    }

    #[test]
    fn test_out_of_bounds_leaves_matrix_untouched() {
        let mut matrix = SparseMatrix::<f64>::zeros(2, 2);
        let before = matrix.clone();

        assert!(matches!(
            matrix.get_or_insert(0, 2),
            Err(MatrixError::Index { row: 0, col: 2, .. })
        ));
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_make_empty_discards_entries() {
        let mut matrix = SparseMatrix::dense(3, 3, 2.0);
        matrix.make_empty(2, 4);

        assert_eq!(matrix.shape(), (2, 4));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.rowind(), &[0, 0, 0]);
    }

    #[test]
    fn test_row_iter() {
        let mut matrix = SparseMatrix::<i32>::zeros(2, 3);
        matrix.set(0, 2, 7).unwrap();
        matrix.set(0, 0, 1).unwrap();

        let row0: Vec<_> = matrix.row_iter(0).unwrap().collect();
        assert_eq!(row0, vec![(0, &1), (2, &7)]);
        assert_eq!(matrix.row_iter(1).unwrap().count(), 0);
        assert!(matrix.row_iter(2).is_err());
    }

    #[test]
    fn test_iter() {
        let mut matrix = SparseMatrix::<i32>::zeros(3, 3);
        matrix.set(2, 1, 3).unwrap();
        matrix.set(0, 0, 1).unwrap();

        let entries: Vec<_> = matrix.iter().map(|(i, j, &v)| (i, j, v)).collect();
        assert_eq!(entries, vec![(0, 0, 1), (2, 1, 3)]);
    }

    #[test]
    fn test_single_lookups() {
        let matrix = SparseMatrix::dense(2, 2, 1);

        assert_eq!(matrix.col_at(3), Some(1));
        assert_eq!(matrix.col_at(4), None);
        assert_eq!(matrix.rowind_at(2), Some(4));
        assert_eq!(matrix.rowind_at(3), None);
    }

    #[test]
    fn test_external_pattern_edit_detected() {
        let mut matrix = SparseMatrix::dense(2, 2, 1);
        matrix.col_mut()[1] = 0;

        assert!(matches!(
            matrix.check_invariants(),
            Err(MatrixError::Pattern(_))
        ));
    }

    #[test]
    fn test_equality_ignores_config() {
        let a = SparseMatrix::<f64>::zeros(2, 2);
        let b = SparseMatrix::with_config(2, 2, StorageConfig::default().with_nnz_capacity(8));
        assert_eq!(a, b);
    }
}
