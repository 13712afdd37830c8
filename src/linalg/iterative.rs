use alloc::vec::Vec;

use crate::dynmatrix::{scaled_l2, DynVector};
use crate::linalg::{check_len, check_square, Convergence, LinalgError};
use crate::traits::{FloatScalar, MatrixRef};

/// Settings for the Jacobi and Gauss-Seidel solvers.
#[derive(Debug, Clone, Copy)]
pub struct IterativeSettings<T> {
    /// Convergence tolerance on the Euclidean norm of the step `‖x_new − x_old‖`.
    pub tol: T,
    /// Maximum number of sweeps.
    pub max_iter: usize,
}

impl Default for IterativeSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 100,
        }
    }
}

impl Default for IterativeSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-4,
            max_iter: 100,
        }
    }
}

/// Result of an iterative linear solve.
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeSolution<T> {
    /// Latest iterate (the solution, if converged).
    pub x: DynVector<T>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Euclidean norm of the last step.
    pub delta: T,
    /// Whether the tolerance was met.
    pub status: Convergence,
}

impl<T> IterativeSolution<T> {
    /// Whether the step norm fell below the tolerance.
    pub fn is_converged(&self) -> bool {
        self.status == Convergence::Converged
    }

    /// Treat anything but convergence as an error.
    ///
    /// ```
    /// use numana::{DynMatrix, DynVector, IterativeSettings, LinalgError};
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[1.0, 2.0]);
    /// let x0 = DynVector::zeros(2, 0.0);
    /// let one_sweep = IterativeSettings { tol: 1e-12, max_iter: 1 };
    /// let sol = a.jacobi(&b, &x0, &one_sweep).unwrap();
    /// assert_eq!(
    ///     sol.into_converged().unwrap_err(),
    ///     LinalgError::ConvergenceFailure { iterations: 1 },
    /// );
    /// ```
    pub fn into_converged(self) -> Result<Self, LinalgError> {
        match self.status {
            Convergence::Converged => Ok(self),
            _ => Err(LinalgError::ConvergenceFailure {
                iterations: self.iterations,
            }),
        }
    }
}

/// Validate shapes and the non-zero diagonal shared by both solvers.
fn check_system<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    b: &[T],
    x0: &[T],
) -> Result<usize, LinalgError> {
    let n = check_square(a)?;
    check_len(n, b.len())?;
    check_len(n, x0.len())?;
    // No pivoting here: a zero diagonal is the caller's to fix
    if let Some(row) = (0..n).find(|&i| *a.get(i, i) == T::zero()) {
        return Err(LinalgError::ZeroDiagonal { row });
    }
    Ok(n)
}

/// `b_i − Σ_{j≠i} a_ij · x_j`
#[inline]
fn off_diagonal_residual<T: FloatScalar>(a: &impl MatrixRef<T>, b: &[T], x: &[T], i: usize) -> T {
    let mut sum = b[i];
    for (j, &xj) in x.iter().enumerate() {
        if j != i {
            sum = sum - *a.get(i, j) * xj;
        }
    }
    sum
}

fn step_norm<T: FloatScalar>(new: &[T], old: &[T]) -> T {
    scaled_l2(new.iter().zip(old.iter()).map(|(&a, &b)| a - b))
}

/// Jacobi iteration for `Ax = b`.
///
/// Every sweep computes each component from the previous sweep only:
/// `x_i ← (b_i − Σ_{j≠i} a_ij · x_j_old) / a_ii`. The sweep is accepted, then
/// the Euclidean norm of the step is compared with `settings.tol`.
///
/// No pivoting is performed. Convergence is guaranteed for strictly
/// diagonally dominant `A` (see
/// [`DynMatrix::is_diagonally_dominant`](crate::DynMatrix::is_diagonally_dominant)).
///
/// Running out of sweeps is not an error: the result carries
/// [`Convergence::MaxIterations`] and the latest iterate. If an iterate
/// overflows, iteration stops with [`Convergence::Diverged`] and the last
/// finite iterate.
///
/// # Errors
///
/// [`LinalgError::NotSquare`], [`LinalgError::DimensionMismatch`] or
/// [`LinalgError::ZeroDiagonal`] for input the method cannot start from.
///
/// ```
/// use numana::DynMatrix;
/// use numana::linalg::{jacobi, IterativeSettings};
///
/// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
/// let sol = jacobi(&a, &[1.0, 2.0], &[0.0, 0.0], &IterativeSettings::default()).unwrap();
/// assert!(sol.is_converged());
/// assert!((sol.x[0] - 0.1).abs() < 1e-5);
/// assert!((sol.x[1] - 0.6).abs() < 1e-5);
/// ```
pub fn jacobi<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    b: &[T],
    x0: &[T],
    settings: &IterativeSettings<T>,
) -> Result<IterativeSolution<T>, LinalgError> {
    let n = check_system(a, b, x0)?;

    let mut x_old: Vec<T> = x0.to_vec();
    let mut x_new: Vec<T> = x0.to_vec();
    let mut delta = T::zero();

    if n == 0 {
        return Ok(IterativeSolution {
            x: DynVector::from_vec(x_old),
            iterations: 0,
            delta,
            status: Convergence::Converged,
        });
    }

    for iter in 1..=settings.max_iter {
        for i in 0..n {
            x_new[i] = off_diagonal_residual(a, b, &x_old, i) / *a.get(i, i);
        }
        delta = step_norm(&x_new, &x_old);
        log_trace!(iter, delta = ?delta, "jacobi sweep");

        if !delta.is_finite() {
            log_debug!(iter, "jacobi diverged");
            return Ok(IterativeSolution {
                x: DynVector::from_vec(x_old),
                iterations: iter,
                delta,
                status: Convergence::Diverged,
            });
        }

        core::mem::swap(&mut x_old, &mut x_new);

        if delta < settings.tol {
            log_debug!(iterations = iter, "jacobi converged");
            return Ok(IterativeSolution {
                x: DynVector::from_vec(x_old),
                iterations: iter,
                delta,
                status: Convergence::Converged,
            });
        }
    }

    log_debug!(max_iter = settings.max_iter, "jacobi reached the iteration limit");
    Ok(IterativeSolution {
        x: DynVector::from_vec(x_old),
        iterations: settings.max_iter,
        delta,
        status: Convergence::MaxIterations,
    })
}

/// Gauss-Seidel iteration for `Ax = b`.
///
/// Same contract as [`jacobi`], but each component is updated in place, so
/// later components in a sweep already see the new values of earlier ones.
/// Usually converges in fewer sweeps on diagonally dominant systems.
pub fn gauss_seidel<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    b: &[T],
    x0: &[T],
    settings: &IterativeSettings<T>,
) -> Result<IterativeSolution<T>, LinalgError> {
    let n = check_system(a, b, x0)?;

    let mut x: Vec<T> = x0.to_vec();
    let mut delta = T::zero();

    if n == 0 {
        return Ok(IterativeSolution {
            x: DynVector::from_vec(x),
            iterations: 0,
            delta,
            status: Convergence::Converged,
        });
    }

    for iter in 1..=settings.max_iter {
        let previous = x.clone();
        for i in 0..n {
            x[i] = off_diagonal_residual(a, b, &x, i) / *a.get(i, i);
        }
        delta = step_norm(&x, &previous);
        log_trace!(iter, delta = ?delta, "gauss-seidel sweep");

        if !delta.is_finite() {
            log_debug!(iter, "gauss-seidel diverged");
            return Ok(IterativeSolution {
                x: DynVector::from_vec(previous),
                iterations: iter,
                delta,
                status: Convergence::Diverged,
            });
        }

        if delta < settings.tol {
            log_debug!(iterations = iter, "gauss-seidel converged");
            return Ok(IterativeSolution {
                x: DynVector::from_vec(x),
                iterations: iter,
                delta,
                status: Convergence::Converged,
            });
        }
    }

    log_debug!(max_iter = settings.max_iter, "gauss-seidel reached the iteration limit");
    Ok(IterativeSolution {
        x: DynVector::from_vec(x),
        iterations: settings.max_iter,
        delta,
        status: Convergence::MaxIterations,
    })
}
