//! Textual rendering
//!
//! The layout is consumed by external printers and must not change:
//!
//! - no elements: `<empty expression>`
//! - one element: the bare value
//! - one column: `[n](v0,v1,...)`
//! - otherwise: `[n,m]((row0),(row1),...)`

use std::fmt::{self, Display, Write};

use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::SparseMatrix;

impl<T: Copy + Zero + Display> SparseMatrix<T> {
    /// Writes the single element of a 1×1 matrix
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] unless the matrix has exactly one element.
    pub fn write_scalar<W: Write>(&self, out: &mut W) -> MatrixResult<()> {
        if self.numel() != 1 {
            return Err(self.shape_error("write_scalar"));
        }
        write!(out, "{}", self.get(0, 0)?)?;
        Ok(())
    }

    /// Writes a column vector as `[n](v0,v1,...)`
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] unless the matrix is a non-empty
    /// single column.
    pub fn write_vector<W: Write>(&self, out: &mut W) -> MatrixResult<()> {
        if !self.is_vector() || self.is_empty() {
            return Err(self.shape_error("write_vector"));
        }
        write!(out, "[{}](", self.size1())?;
        for i in 0..self.size1() {
            if i > 0 {
                out.write_char(',')?;
            }
            write!(out, "{}", self.get(i, 0)?)?;
        }
        out.write_char(')')?;
        Ok(())
    }

    /// Writes a matrix as `[n,m]((row0),(row1),...)`
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if the matrix has no elements.
    pub fn write_matrix<W: Write>(&self, out: &mut W) -> MatrixResult<()> {
        if self.is_empty() {
            return Err(self.shape_error("write_matrix"));
        }
        write!(out, "[{},{}](", self.size1(), self.size2())?;
        for i in 0..self.size1() {
            if i > 0 {
                out.write_char(',')?;
            }
            out.write_char('(')?;
            for j in 0..self.size2() {
                if j > 0 {
                    out.write_char(',')?;
                }
                write!(out, "{}", self.get(i, j)?)?;
            }
            out.write_char(')')?;
        }
        out.write_char(')')?;
        Ok(())
    }

    fn shape_error(&self, operation: &'static str) -> MatrixError {
        MatrixError::Shape {
            operation,
            nrow: self.size1(),
            ncol: self.size2(),
        }
    }
}

impl<T: Copy + Zero + Display> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("<empty expression>");
        }
        let rendered = if self.numel() == 1 {
            self.write_scalar(f)
        } else if self.is_vector() {
            self.write_vector(f)
        } else {
            self.write_matrix(f)
        };
        rendered.map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(SparseMatrix::<f64>::new().to_string(), "<empty expression>");
        assert_eq!(SparseMatrix::<f64>::zeros(0, 3).to_string(), "<empty expression>");
    }

    #[test]
    fn test_scalar() {
        assert_eq!(SparseMatrix::from_scalar(2.5).to_string(), "2.5");
        assert_eq!(SparseMatrix::<i32>::zeros(1, 1).to_string(), "0");
    }

    #[test]
    fn test_vector() {
        let matrix = SparseMatrix::<f64>::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(matrix.to_string(), "[3](1,2,3)");
    }

    #[test]
    fn test_row_is_rendered_as_matrix() {
        let matrix = SparseMatrix::dense(1, 3, 4);
        assert_eq!(matrix.to_string(), "[1,3]((4,4,4))");
    }

    #[test]
    fn test_matrix_with_absent_entries() {
        let mut matrix = SparseMatrix::<i32>::zeros(2, 3);
        matrix.set(1, 1, 5).unwrap();
        assert_eq!(matrix.to_string(), "[2,3]((0,0,0),(0,5,0))");
    }

    #[test]
    fn test_write_scalar_requires_one_element() {
        let matrix = SparseMatrix::dense(2, 2, 1.0);
        let mut out = String::new();

        assert_eq!(
            matrix.write_scalar(&mut out),
            Err(MatrixError::Shape {
                operation: "write_scalar",
                nrow: 2,
                ncol: 2
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_vector_rejects_matrix() {
        let matrix = SparseMatrix::dense(2, 2, 1.0);
        assert!(matrix.write_vector(&mut String::new()).is_err());
    }
}
