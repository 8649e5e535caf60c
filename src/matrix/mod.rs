// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod crs;
pub mod display;

pub use config::StorageConfig;
pub use crs::SparseMatrix;
