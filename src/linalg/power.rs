use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::{check_len, check_square, gauss_jordan_in_place, mat_vec, Convergence, LinalgError};
use crate::traits::{FloatScalar, MatrixRef};

/// Settings for [`power_iteration`].
#[derive(Debug, Clone, Copy)]
pub struct PowerSettings<T> {
    /// Tolerance on the L1 distance between successive normalized iterates.
    pub tol: T,
    /// Maximum number of matrix-vector products.
    pub max_iter: usize,
}

impl Default for PowerSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 1000,
        }
    }
}

impl Default for PowerSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 1000,
        }
    }
}

/// Eigenvalue estimate from power iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenEstimate<T> {
    /// Rayleigh quotient `vᵀAv` of the final unit vector.
    pub value: T,
    /// Final normalized iterate.
    pub vector: DynVector<T>,
    pub iterations: usize,
    /// L1 distance between the last two iterates.
    pub delta: T,
    pub status: Convergence,
}

impl<T> EigenEstimate<T> {
    pub fn is_converged(&self) -> bool {
        self.status == Convergence::Converged
    }
}

/// Unit vector along `v`, telling a zero vector apart from a non-finite one.
fn unit<T: FloatScalar>(v: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
    v.normalize().ok_or_else(|| {
        if v.norm().is_finite() {
            LinalgError::ZeroVector
        } else {
            LinalgError::NotFinite
        }
    })
}

/// Dominant eigenvalue and eigenvector by power iteration.
///
/// The start vector is normalized, then `v ← normalize(A·v)` is repeated
/// until the L1 distance between successive iterates drops below
/// `settings.tol`. The eigenvalue is the Rayleigh quotient `vᵀ(Av)`.
///
/// The iterate only settles if the dominant eigenvalue is strictly larger in
/// magnitude than the others and positive. For a negative dominant
/// eigenvalue the vector flips sign every step: the status ends as
/// [`Convergence::MaxIterations`] while `value` is still accurate.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`], [`LinalgError::Empty`],
///   [`LinalgError::DimensionMismatch`] for bad shapes.
/// - [`LinalgError::ZeroVector`] if `v0` or an iterate `A·v` is zero.
/// - [`LinalgError::NotFinite`] if `v0` or an iterate `A·v` holds NaN or
///   infinity.
///
/// ```
/// use numana::DynMatrix;
/// use numana::linalg::{power_iteration, PowerSettings};
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 2.0]);
/// let est = power_iteration(&a, &[1.0, 0.0], &PowerSettings::default()).unwrap();
/// assert!(est.is_converged());
/// assert!((est.value - 3.0).abs() < 1e-9);
/// ```
pub fn power_iteration<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    v0: &[T],
    settings: &PowerSettings<T>,
) -> Result<EigenEstimate<T>, LinalgError> {
    let n = check_square(a)?;
    if n == 0 {
        return Err(LinalgError::Empty);
    }
    check_len(n, v0.len())?;

    let mut v = unit(&DynVector::from_slice(v0))?;
    let mut delta = T::infinity();
    let mut iterations = settings.max_iter;
    let mut status = Convergence::MaxIterations;

    for iter in 1..=settings.max_iter {
        let next = unit(&mat_vec(a, &v))?;
        delta = next.distance_l1(&v);
        v = next;
        log_trace!(iter, delta = ?delta, "power iteration step");

        if delta < settings.tol {
            iterations = iter;
            status = Convergence::Converged;
            break;
        }
    }

    let value = v.dot(&mat_vec(a, &v));
    if status == Convergence::Converged {
        log_debug!(iterations, "power iteration converged");
    } else {
        log_debug!(max_iter = settings.max_iter, "power iteration reached the iteration limit");
    }

    Ok(EigenEstimate {
        value,
        vector: v,
        iterations,
        delta,
        status,
    })
}

/// Smallest-magnitude eigenvalue: power iteration on `A⁻¹`, then the
/// reciprocal.
///
/// The returned vector is the dominant eigenvector of `A⁻¹`, which is the
/// eigenvector of `A` for the returned value. `a` is not modified.
///
/// # Errors
///
/// Everything [`power_iteration`] returns, plus [`LinalgError::Singular`]
/// when `A` cannot be inverted.
///
/// ```
/// use numana::{DynMatrix, DynVector};
/// use numana::linalg::{smallest_eigenvalue, PowerSettings};
///
/// let a = DynMatrix::from_diag(&DynVector::from_slice(&[5.0_f64, 2.0, 1.0]));
/// let est = smallest_eigenvalue(&a, &[1.0, 1.0, 1.0], &PowerSettings::default()).unwrap();
/// assert!((est.value - 1.0).abs() < 1e-8);
/// ```
pub fn smallest_eigenvalue<T: FloatScalar>(
    a: &DynMatrix<T>,
    v0: &[T],
    settings: &PowerSettings<T>,
) -> Result<EigenEstimate<T>, LinalgError> {
    let n = check_square(a)?;
    if n == 0 {
        return Err(LinalgError::Empty);
    }
    let mut work = a.clone();
    let mut inv = DynMatrix::zeros(n, n, T::zero());
    gauss_jordan_in_place(&mut work, &mut inv)?;

    let mut est = power_iteration(&inv, v0, settings)?;
    if est.value == T::zero() {
        return Err(LinalgError::Singular);
    }
    est.value = T::one() / est.value;
    Ok(est)
}
