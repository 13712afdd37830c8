use crate::dynmatrix::DynVector;
use crate::traits::FloatScalar;

use super::jacobian::forward_difference;
use super::{OptimError, SystemRootResult};

/// Settings for [`newton_system`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonSettings<T> {
    /// Convergence tolerance on the Newton step norm `‖dx‖`.
    pub tol: T,
    /// Maximum number of Newton steps.
    pub max_iter: usize,
    /// Step multiplier: `x ← x + damping · dx`. `1.0` is plain Newton;
    /// values above one over-relax, values below one damp.
    pub damping: T,
}

impl Default for NewtonSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 50,
            damping: 1.0,
        }
    }
}

impl Default for NewtonSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 50,
            damping: 1.0,
        }
    }
}

fn check_output<T: crate::traits::Scalar>(n: usize, fx: &DynVector<T>) -> Result<(), OptimError> {
    if fx.len() != n {
        return Err(OptimError::DimensionMismatch {
            expected: n,
            got: fx.len(),
        });
    }
    Ok(())
}

/// Newton's method for a square nonlinear system `F(x) = 0`.
///
/// Each step builds a forward-difference Jacobian `J` at `x`, solves
/// `J·dx = −F(x)` by pivoted Gaussian elimination, then moves
/// `x ← x + damping · dx`. Converged once `‖dx‖ < tol`.
///
/// # Errors
///
/// - [`OptimError::Singular`] if the Jacobian cannot be factored.
/// - [`OptimError::NotFinite`] if `F(x)` contains NaN or infinity.
/// - [`OptimError::DimensionMismatch`] if `F(x)` has a different length
///   than `x`.
/// - [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use numana::DynVector;
/// use numana::optim::{newton_system, NewtonSettings};
///
/// // x² + y² = 4, x = y  →  x = y = √2
/// let f = |v: &DynVector<f64>| {
///     DynVector::from_slice(&[v[0] * v[0] + v[1] * v[1] - 4.0, v[0] - v[1]])
/// };
/// let x0 = DynVector::from_slice(&[1.0, 2.0]);
/// let r = newton_system(f, &x0, &NewtonSettings::default()).unwrap();
/// assert!((r.x[0] - core::f64::consts::SQRT_2).abs() < 1e-9);
/// assert!((r.x[1] - core::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton_system<T: FloatScalar>(
    mut f: impl FnMut(&DynVector<T>) -> DynVector<T>,
    x0: &DynVector<T>,
    settings: &NewtonSettings<T>,
) -> Result<SystemRootResult<T>, OptimError> {
    let n = x0.len();
    let mut x = x0.clone();
    let mut evals = 0usize;

    for iter in 0..settings.max_iter {
        let fx = f(&x);
        evals += 1;
        check_output(n, &fx)?;
        if fx.iter().any(|v| !v.is_finite()) {
            return Err(OptimError::NotFinite);
        }

        let jac = forward_difference(&mut f, &x, &fx)?;
        evals += n;

        let dx = jac.solve(&(-&fx)).map_err(|_e| {
            log_debug!(iter, error = %_e, "newton jacobian is singular");
            OptimError::Singular
        })?;
        let step = dx.norm();
        for (xi, &di) in x.as_mut_slice().iter_mut().zip(dx.iter()) {
            *xi = *xi + settings.damping * di;
        }
        log_trace!(iter, step = ?step, "newton system step");

        if step < settings.tol {
            let residual = f(&x);
            evals += 1;
            check_output(n, &residual)?;
            let residual_norm = residual.norm();
            if !residual_norm.is_finite() {
                return Err(OptimError::NotFinite);
            }
            log_debug!(iterations = iter + 1, "newton system converged");
            return Ok(SystemRootResult {
                x,
                residual_norm,
                iterations: iter + 1,
                evals,
            });
        }
    }

    log_debug!(max_iter = settings.max_iter, "newton system reached the iteration limit");
    Err(OptimError::MaxIterations)
}
