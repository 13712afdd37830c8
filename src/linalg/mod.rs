//! Dense linear-algebra kernel.
//!
//! - [`gauss_eliminate_in_place`] / [`back_substitute`] — Gaussian elimination
//!   with partial pivoting; [`determinant_in_place`] tracks the row-swap sign.
//! - [`gauss_jordan_in_place`] — inverse by Gauss-Jordan elimination.
//! - [`jacobi`] / [`gauss_seidel`] — fixed-point iteration for `Ax = b`.
//! - [`power_iteration`] / [`smallest_eigenvalue`] — extremal eigenvalues.
//!
//! Free functions take `&mut impl MatrixMut<T>` and overwrite it. The
//! convenience methods on [`DynMatrix`](crate::DynMatrix) (`solve`, `det`,
//! `inverse`, ...) clone the caller's matrix first and never modify it.

mod gauss;
mod gauss_jordan;
mod iterative;
mod power;

#[cfg(test)]
mod tests;

pub use gauss::{back_substitute, determinant_in_place, gauss_eliminate_in_place};
pub use gauss_jordan::gauss_jordan_in_place;
pub use iterative::{gauss_seidel, jacobi, IterativeSettings, IterativeSolution};
pub use power::{power_iteration, smallest_eigenvalue, EigenEstimate, PowerSettings};

use crate::dynmatrix::DynVector;
use crate::traits::{FloatScalar, MatrixRef};

/// Errors from linear algebra operations.
///
/// ```
/// use numana::{DynMatrix, DynVector, LinalgError};
///
/// let singular = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let rect = DynMatrix::from_rows(1, 2, &[1.0_f64, 2.0]);
/// let err = rect.det().unwrap_err();
/// assert_eq!(err, LinalgError::NotSquare { nrows: 1, ncols: 2 });
/// assert!(err.is_degenerate_input());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// A pivot fell below the singularity threshold.
    Singular,
    /// The operation requires a square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// A vector's length does not match the matrix dimension.
    DimensionMismatch { expected: usize, got: usize },
    /// The operation needs at least one row.
    Empty,
    /// Zero on the diagonal; iterative solvers do not pivot.
    ZeroDiagonal { row: usize },
    /// A vector that must be normalized has zero length.
    ZeroVector,
    /// A vector that must be normalized contains NaN or infinity.
    NotFinite,
    /// Iterative algorithm did not converge within the iteration budget.
    ConvergenceFailure { iterations: usize },
}

impl LinalgError {
    /// Whether this error describes malformed input rather than a
    /// numerical outcome.
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            LinalgError::NotSquare { .. }
                | LinalgError::DimensionMismatch { .. }
                | LinalgError::Empty
                | LinalgError::ZeroDiagonal { .. }
                | LinalgError::ZeroVector
        )
    }
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::NotSquare { nrows, ncols } => {
                write!(f, "matrix must be square, got {}x{}", nrows, ncols)
            }
            LinalgError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected length {}, got {}", expected, got)
            }
            LinalgError::Empty => write!(f, "matrix is empty"),
            LinalgError::ZeroDiagonal { row } => write!(f, "zero diagonal entry in row {}", row),
            LinalgError::ZeroVector => write!(f, "cannot normalize a zero vector"),
            LinalgError::NotFinite => write!(f, "vector contains NaN or infinity"),
            LinalgError::ConvergenceFailure { iterations } => {
                write!(f, "iterative algorithm did not converge after {} iterations", iterations)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// Outcome of an iterative method.
///
/// Running out of iterations is not an error: the result still carries the
/// latest estimate and the caller decides whether to accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The step size fell below the tolerance.
    Converged,
    /// The iteration budget ran out first.
    MaxIterations,
    /// The iterate stopped being finite; the result holds the last finite one.
    Diverged,
}

/// Ensure `a` is square and return its dimension.
pub(crate) fn check_square<T>(a: &impl MatrixRef<T>) -> Result<usize, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

/// Ensure a vector has the expected length.
pub(crate) fn check_len(expected: usize, got: usize) -> Result<(), LinalgError> {
    if expected != got {
        return Err(LinalgError::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// `A·v` for any row-major matrix.
pub(crate) fn mat_vec<T: FloatScalar>(a: &impl MatrixRef<T>, v: &DynVector<T>) -> DynVector<T> {
    let data = (0..a.nrows())
        .map(|i| {
            (0..a.ncols()).fold(T::zero(), |acc, j| acc + *a.get(i, j) * v[j])
        })
        .collect();
    DynVector::from_vec(data)
}
