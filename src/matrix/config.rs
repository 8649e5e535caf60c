//! Storage configuration for sparse matrices

/// Tuning parameters for a [`SparseMatrix`](crate::SparseMatrix)'s backing storage
///
/// None of these settings change the contents of a matrix. They only
/// influence allocation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageConfig {
    /// Capacity reserved for stored entries at construction
    pub nnz_capacity: usize,

    /// Emit a warning once fill-in grows the matrix past this many entries
    ///
    /// Every fill-in shifts the tail of the storage, so building a large
    /// pattern entry by entry costs O(nnz²).
    pub fill_in_warn_nnz: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            nnz_capacity: 0,
            fill_in_warn_nnz: Some(DEFAULT_FILL_IN_WARN_NNZ),
        }
    }
}

/// Default fill-in warning threshold
pub const DEFAULT_FILL_IN_WARN_NNZ: usize = 1 << 16;

impl StorageConfig {
    /// Sets the number of entries to reserve up front
    pub fn with_nnz_capacity(mut self, nnz_capacity: usize) -> Self {
        self.nnz_capacity = nnz_capacity;
        self
    }

    /// Sets the fill-in warning threshold (`None` disables the warning)
    pub fn with_fill_in_warning(mut self, threshold: Option<usize>) -> Self {
        self.fill_in_warn_nnz = threshold;
        self
    }
}
