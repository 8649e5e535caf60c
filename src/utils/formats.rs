//! Utilities for converting between our matrix format and sprs

use num_traits::Zero;
use sprs::CsMat;

use crate::error::MatrixResult;
use crate::matrix::SparseMatrix;

/// Converts a matrix to sprs CsMat in CSR format
///
/// The pattern is validated first, so a matrix whose arrays were edited
/// into an inconsistent state yields an error instead of a panic in sprs.
pub fn to_sprs<T>(matrix: &SparseMatrix<T>) -> MatrixResult<CsMat<T>>
where
    T: Copy + Zero + Default,
{
    matrix.check_invariants()?;
    Ok(CsMat::new(
        matrix.shape(),
        matrix.rowind().to_vec(),
        matrix.col().to_vec(),
        matrix.values().to_vec(),
    ))
}

/// Converts a sprs CsMat to our format, going through CSR if needed
///
/// Explicitly stored entries stay stored, zero or not.
pub fn from_sprs<T>(matrix: CsMat<T>) -> MatrixResult<SparseMatrix<T>>
where
    T: Copy + Zero + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (nrow, ncol) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();
    log::debug!("importing {}×{} sprs matrix with {} entries", nrow, ncol, data.len());

    SparseMatrix::from_parts(nrow, ncol, indptr, indices, data)
}
