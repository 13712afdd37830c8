use crate::dynmatrix::{DynMatrix, DynVector};
use crate::traits::FloatScalar;

use super::OptimError;

/// Approximate the Jacobian of `f: Rⁿ → Rᵐ` using forward finite differences.
///
/// Uses step size `h_j = sqrt(ε) * max(|x_j|, 1)` for each component,
/// requiring `n + 1` function evaluations (one base evaluation + n perturbed).
/// The result is `m × n` with `J[(i, j)] = ∂f_i/∂x_j`.
///
/// # Errors
///
/// [`OptimError::DimensionMismatch`] if a perturbed evaluation returns a
/// vector of a different length than `f(x)`.
///
/// # Example
///
/// ```
/// use numana::DynVector;
/// use numana::optim::finite_difference_jacobian;
///
/// // f(x) = [x0^2, x0*x1], Jacobian = [[2*x0, 0], [x1, x0]]
/// let x = DynVector::from_slice(&[3.0_f64, 4.0]);
/// let j = finite_difference_jacobian(|x: &DynVector<f64>| {
///     DynVector::from_slice(&[x[0] * x[0], x[0] * x[1]])
/// }, &x).unwrap();
/// assert!((j[(0, 0)] - 6.0).abs() < 1e-6);
/// assert!((j[(0, 1)] - 0.0).abs() < 1e-6);
/// assert!((j[(1, 0)] - 4.0).abs() < 1e-6);
/// assert!((j[(1, 1)] - 3.0).abs() < 1e-6);
/// ```
pub fn finite_difference_jacobian<T: FloatScalar>(
    mut f: impl FnMut(&DynVector<T>) -> DynVector<T>,
    x: &DynVector<T>,
) -> Result<DynMatrix<T>, OptimError> {
    let f0 = f(x);
    forward_difference(&mut f, x, &f0)
}

/// Forward-difference Jacobian around a point where `f0 = f(x)` is already known.
pub(crate) fn forward_difference<T: FloatScalar>(
    f: &mut impl FnMut(&DynVector<T>) -> DynVector<T>,
    x: &DynVector<T>,
    f0: &DynVector<T>,
) -> Result<DynMatrix<T>, OptimError> {
    let sqrt_eps = T::epsilon().sqrt();
    let n = x.len();
    let m = f0.len();
    let mut jac = DynMatrix::zeros(m, n, T::zero());
    let mut x_pert = x.clone();

    for j in 0..n {
        let h = sqrt_eps * x[j].abs().max(T::one());
        x_pert[j] = x[j] + h;
        let f_pert = f(&x_pert);
        if f_pert.len() != m {
            return Err(OptimError::DimensionMismatch {
                expected: m,
                got: f_pert.len(),
            });
        }
        for i in 0..m {
            jac[(i, j)] = (f_pert[i] - f0[i]) / h;
        }
        x_pert[j] = x[j];
    }

    Ok(jac)
}
