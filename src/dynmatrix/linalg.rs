use alloc::vec;

use crate::linalg::{
    back_substitute, determinant_in_place, gauss_eliminate_in_place, gauss_jordan_in_place,
    gauss_seidel, jacobi, power_iteration, smallest_eigenvalue, EigenEstimate, IterativeSettings,
    IterativeSolution, LinalgError, PowerSettings,
};
use crate::traits::FloatScalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Convenience methods on DynMatrix ────────────────────────────────
//
// Each method works on a private copy; `self` is never modified.

impl<T: FloatScalar> DynMatrix<T> {
    /// Solve `Ax = b` by Gaussian elimination with partial pivoting.
    ///
    /// The 0×0 system has the empty solution.
    ///
    /// ```
    /// use numana::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[1.0, 2.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 0.1).abs() < 1e-12);
    /// assert!((x[1] - 0.6).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        let mut u = self.clone();
        let mut y = b.clone();
        gauss_eliminate_in_place(&mut u, y.as_mut_slice())?;
        let mut x = vec![T::zero(); y.len()];
        back_substitute(&u, y.as_slice(), &mut x);
        Ok(DynVector::from_vec(x))
    }

    /// Determinant. A numerically singular matrix gives exactly zero.
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((a.det().unwrap() + 14.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T, LinalgError> {
        determinant_in_place(&mut self.clone())
    }

    /// Matrix inverse by Gauss-Jordan elimination.
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = &a * &a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<DynMatrix<T>, LinalgError> {
        let mut work = self.clone();
        let n = self.nrows();
        let mut inv = DynMatrix::zeros(n, self.ncols(), T::zero());
        gauss_jordan_in_place(&mut work, &mut inv)?;
        Ok(inv)
    }

    /// Jacobi iteration for `Ax = b` starting from `x0`. See [`jacobi`].
    pub fn jacobi(
        &self,
        b: &DynVector<T>,
        x0: &DynVector<T>,
        settings: &IterativeSettings<T>,
    ) -> Result<IterativeSolution<T>, LinalgError> {
        jacobi(self, b.as_slice(), x0.as_slice(), settings)
    }

    /// Gauss-Seidel iteration for `Ax = b` starting from `x0`. See [`gauss_seidel`].
    ///
    /// ```
    /// use numana::{DynMatrix, DynVector, IterativeSettings};
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[1.0, 2.0]);
    /// let x0 = DynVector::zeros(2, 0.0);
    /// let sol = a.gauss_seidel(&b, &x0, &IterativeSettings::default()).unwrap();
    /// assert!(sol.is_converged());
    /// assert!((sol.x[1] - 0.6).abs() < 1e-5);
    /// ```
    pub fn gauss_seidel(
        &self,
        b: &DynVector<T>,
        x0: &DynVector<T>,
        settings: &IterativeSettings<T>,
    ) -> Result<IterativeSolution<T>, LinalgError> {
        gauss_seidel(self, b.as_slice(), x0.as_slice(), settings)
    }

    /// Dominant eigenvalue by power iteration. See [`power_iteration`].
    pub fn power_iteration(
        &self,
        v0: &DynVector<T>,
        settings: &PowerSettings<T>,
    ) -> Result<EigenEstimate<T>, LinalgError> {
        power_iteration(self, v0.as_slice(), settings)
    }

    /// Smallest-magnitude eigenvalue by power iteration on the inverse.
    /// See [`smallest_eigenvalue`].
    pub fn smallest_eigenvalue(
        &self,
        v0: &DynVector<T>,
        settings: &PowerSettings<T>,
    ) -> Result<EigenEstimate<T>, LinalgError> {
        smallest_eigenvalue(self, v0.as_slice(), settings)
    }
}
