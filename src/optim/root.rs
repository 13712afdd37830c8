use crate::traits::FloatScalar;

use super::{OptimError, RootResult};

/// Settings for scalar root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on the bracket half-width (bisection) or the
    /// Newton step `|x_{n+1} - x_n|`.
    pub x_tol: T,
    /// Convergence tolerance on the function value `|f(x)|`.
    pub f_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            x_tol: 1e-12,
            f_tol: 1e-12,
            max_iter: 100,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            x_tol: 1e-6,
            f_tol: 1e-6,
            max_iter: 100,
        }
    }
}

#[inline]
fn finite<T: FloatScalar>(v: T) -> Result<T, OptimError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OptimError::NotFinite)
    }
}

#[inline]
fn half<T: FloatScalar>() -> T {
    T::one() / (T::one() + T::one())
}

/// Evaluate both endpoints and check that they bracket a sign change.
///
/// Returns `Ok(Err(root))` when an endpoint is already an exact root.
fn bracket<T: FloatScalar>(
    f: &mut impl FnMut(T) -> T,
    a: T,
    b: T,
) -> Result<Result<(T, T), RootResult<T>>, OptimError> {
    let fa = finite(f(a))?;
    let fb = finite(f(b))?;
    for (x, fx) in [(a, fa), (b, fb)] {
        if fx == T::zero() {
            return Ok(Err(RootResult {
                x,
                fx,
                iterations: 0,
                evals: 2,
            }));
        }
    }
    if (fa > T::zero()) == (fb > T::zero()) {
        return Err(OptimError::BracketInvalid);
    }
    Ok(Ok((fa, fb)))
}

/// Bisection on a sign-change bracket.
///
/// Halves `[a, b]` while the half-width `|b - a| / 2` exceeds
/// `settings.x_tol + 2ε·max(|a|, |b|)`, keeping the half whose endpoints
/// still differ in sign. The relative term stops the search once the bracket
/// is as narrow as the float spacing allows.
/// The result is the final midpoint. A midpoint where `f` is exactly zero is
/// returned immediately.
///
/// # Errors
///
/// - [`OptimError::BracketInvalid`] if `f(a)` and `f(b)` have the same sign.
/// - [`OptimError::NotFinite`] if `f` returns NaN or infinity.
/// - [`OptimError::MaxIterations`] if the bracket is still too wide.
///
/// # Example
///
/// ```
/// use numana::optim::{bisection, RootSettings};
///
/// let r = bisection(|x| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-11);
/// ```
pub fn bisection<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let (mut fa, _) = match bracket(&mut f, a, b)? {
        Ok(values) => values,
        Err(root) => return Ok(root),
    };
    let mut a = a;
    let mut b = b;
    let mut evals = 2usize;

    let two_eps = T::epsilon() + T::epsilon();
    for iter in 0..settings.max_iter {
        let mid = (a + b) * half();
        // The bracket cannot shrink below the spacing of floats near the root
        let tol = settings.x_tol + two_eps * a.abs().max(b.abs());
        if (b - a).abs() * half() <= tol || mid == a || mid == b {
            let fx = finite(f(mid))?;
            log_debug!(iterations = iter, "bisection converged");
            return Ok(RootResult {
                x: mid,
                fx,
                iterations: iter,
                evals: evals + 1,
            });
        }

        let fm = finite(f(mid))?;
        evals += 1;
        log_trace!(iter, x = ?mid, fx = ?fm, "bisection step");

        if fm == T::zero() {
            return Ok(RootResult {
                x: mid,
                fx: fm,
                iterations: iter + 1,
                evals,
            });
        }

        if (fa > T::zero()) == (fm > T::zero()) {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }

    log_debug!(max_iter = settings.max_iter, "bisection reached the iteration limit");
    Err(OptimError::MaxIterations)
}

/// Regula falsi (false position) on a sign-change bracket.
///
/// Like bisection, but the new point is where the chord through
/// `(a, f(a))` and `(b, f(b))` crosses zero. Stops when `|f(x)| <= f_tol`.
///
/// # Errors
///
/// Same as [`bisection`].
///
/// # Example
///
/// ```
/// use numana::optim::{regula_falsi, RootSettings};
///
/// let r = regula_falsi(|x: f64| x * x * x - x - 2.0, 1.0, 2.0, &RootSettings::default()).unwrap();
/// assert!(r.fx.abs() <= 1e-12);
/// ```
pub fn regula_falsi<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let (mut fa, mut fb) = match bracket(&mut f, a, b)? {
        Ok(values) => values,
        Err(root) => return Ok(root),
    };
    let mut a = a;
    let mut b = b;
    let mut evals = 2usize;

    for iter in 0..settings.max_iter {
        let c = (a * fb - b * fa) / (fb - fa);
        let fc = finite(f(c))?;
        evals += 1;
        log_trace!(iter, x = ?c, fx = ?fc, "regula falsi step");

        if fc.abs() <= settings.f_tol {
            log_debug!(iterations = iter + 1, "regula falsi converged");
            return Ok(RootResult {
                x: c,
                fx: fc,
                iterations: iter + 1,
                evals,
            });
        }

        if (fa > T::zero()) == (fc > T::zero()) {
            a = c;
            fa = fc;
        } else {
            b = c;
            fb = fc;
        }
    }

    log_debug!(max_iter = settings.max_iter, "regula falsi reached the iteration limit");
    Err(OptimError::MaxIterations)
}

/// Secant method from two starting points.
///
/// `x_{n+1} = x_n - f(x_n) (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`, iterated
/// while `|f(x_n)| > f_tol`. No bracket is required.
///
/// # Errors
///
/// - [`OptimError::Singular`] if two successive function values are equal
///   (the secant is flat).
/// - [`OptimError::NotFinite`] if `f` returns NaN or infinity.
/// - [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use numana::optim::{secant, RootSettings};
///
/// let r = secant(|x: f64| x.cos() - x, 0.0, 1.0, &RootSettings::default()).unwrap();
/// assert!((r.x - 0.7390851332151607).abs() < 1e-12);
/// ```
pub fn secant<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x0: T,
    x1: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let mut x_prev = x0;
    let mut f_prev = finite(f(x0))?;
    let mut x = x1;
    let mut fx = finite(f(x1))?;
    let mut evals = 2usize;

    for iter in 0..settings.max_iter {
        if fx.abs() <= settings.f_tol {
            log_debug!(iterations = iter, "secant converged");
            return Ok(RootResult {
                x,
                fx,
                iterations: iter,
                evals,
            });
        }
        if fx == f_prev {
            return Err(OptimError::Singular);
        }

        let x_new = x - fx * (x - x_prev) / (fx - f_prev);
        x_prev = x;
        f_prev = fx;
        x = finite(x_new)?;
        fx = finite(f(x))?;
        evals += 1;
        log_trace!(iter, x = ?x, fx = ?fx, "secant step");
    }

    if fx.abs() <= settings.f_tol {
        return Ok(RootResult {
            x,
            fx,
            iterations: settings.max_iter,
            evals,
        });
    }
    log_debug!(max_iter = settings.max_iter, "secant reached the iteration limit");
    Err(OptimError::MaxIterations)
}

/// Newton's method for scalar root finding.
///
/// Uses `x_{n+1} = x_n - f(x_n) / f'(x_n)` with user-supplied derivative.
/// Stops when `|f(x)| < f_tol` or the step is shorter than `x_tol`.
///
/// # Errors
///
/// - [`OptimError::Singular`] if `|f'(x)|` falls below `1e-10`.
/// - [`OptimError::NotFinite`] if `f` or `f'` returns NaN or infinity.
/// - [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use numana::optim::{newton_1d, RootSettings};
///
/// // Find √2 as root of x² - 2
/// let r = newton_1d(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     &RootSettings::default(),
/// ).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn newton_1d<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    // Same cutoff as the elimination pivots
    let min_slope = T::pivot_threshold();
    let mut x = x0;
    let mut fx = finite(f(x))?;
    let mut evals = 1usize;

    for iter in 0..settings.max_iter {
        if fx.abs() < settings.f_tol {
            log_debug!(iterations = iter, "newton converged");
            return Ok(RootResult {
                x,
                fx,
                iterations: iter,
                evals,
            });
        }

        let dfx = finite(df(x))?;
        evals += 1;

        if dfx.abs() < min_slope {
            log_debug!(iter, "newton derivative vanished");
            return Err(OptimError::Singular);
        }

        let x_new = x - fx / dfx;
        log_trace!(iter, x = ?x_new, "newton step");

        if (x_new - x).abs() < settings.x_tol {
            fx = finite(f(x_new))?;
            evals += 1;
            return Ok(RootResult {
                x: x_new,
                fx,
                iterations: iter + 1,
                evals,
            });
        }

        x = x_new;
        fx = finite(f(x))?;
        evals += 1;
    }

    log_debug!(max_iter = settings.max_iter, "newton reached the iteration limit");
    Err(OptimError::MaxIterations)
}
