use alloc::vec::Vec;

use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        (0..n).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }

    /// Extract the diagonal as a `DynVector`.
    pub fn diag(&self) -> DynVector<T> {
        let n = self.nrows.min(self.ncols);
        let data: Vec<T> = (0..n).map(|i| self[(i, i)]).collect();
        DynVector::from_vec(data)
    }

    /// Create a square diagonal matrix from a vector.
    ///
    /// ```
    /// use numana::{DynMatrix, DynVector};
    /// let v = DynVector::from_slice(&[5.0, 2.0, 1.0]);
    /// let m = DynMatrix::from_diag(&v);
    /// assert_eq!(m[(0, 0)], 5.0);
    /// assert_eq!(m[(2, 2)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(v: &DynVector<T>) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Whether every row is strictly diagonally dominant:
    /// `|a_ii| > Σ_{j≠i} |a_ij|`.
    ///
    /// Sufficient (not necessary) for Jacobi and Gauss-Seidel to converge.
    /// Returns `false` for non-square matrices.
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
    /// assert!(a.is_diagonally_dominant());
    /// let b = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 1.0]);
    /// assert!(!b.is_diagonally_dominant());
    /// ```
    pub fn is_diagonally_dominant(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.nrows).all(|i| {
            let off: T = self
                .row(i)
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, &x)| acc + x.abs());
            self[(i, i)].abs() > off
        })
    }
}
