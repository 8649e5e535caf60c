//! # crsmat: mutable Compressed Row Storage matrices
//!
//! A generic two-dimensional sparse container in Compressed Row Storage
//! (CRS) layout whose sparsity pattern grows lazily: writing to an absent
//! coordinate stores a new entry in place, keeping every row's columns
//! sorted and the row offsets consistent.
//!
//! ## Overview
//!
//! - Empty, dense-filled, scalar and flat-sequence construction
//! - Read access that yields zero for absent coordinates
//! - Write access that inserts on first touch
//! - Exact textual rendering for external printers
//! - Interop with `sprs` and `ndarray`
//!
//! ## Usage
//!
//! ```
//! use crsmat::SparseMatrix;
//!
//! let mut m = SparseMatrix::<f64>::zeros(3, 3);
//! *m.get_or_insert(1, 2).unwrap() = 7.0;
//!
//! assert_eq!(m.rowind(), &[0, 0, 1, 1]);
//! assert_eq!(m.get(1, 2).unwrap(), 7.0);
//! assert_eq!(m.get(0, 0).unwrap(), 0.0);
//! ```
//!
//! Flat sequences are read in row-major order:
//!
//! ```
//! use crsmat::SparseMatrix;
//!
//! let m = SparseMatrix::<f64>::from_vec_with_shape(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
//! assert_eq!(m.to_string(), "[2,2]((1,2),(3,4))");
//! ```

pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, MatrixResult, PatternError};
pub use matrix::{SparseMatrix, StorageConfig};
pub use utils::{from_sprs, to_sprs};

/// Version information for the crsmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
