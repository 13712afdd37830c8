use crate::traits::FloatScalar;

use super::{FixedStep, OdeError, Solution};

#[inline]
fn half<T: FloatScalar>() -> T {
    T::one() / (T::one() + T::one())
}

/// Single forward Euler step: `y + h·f(t, y)`.
///
/// ```
/// use numana::ode::euler_step;
/// let y1 = euler_step(0.0, 1.0, 0.1, |_t, y: f64| -y);
/// assert!((y1 - 0.9).abs() < 1e-15);
/// ```
pub fn euler_step<T: FloatScalar>(t: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    y + h * f(t, y)
}

/// Single Heun (improved Euler) step.
///
/// Predicts with Euler, then averages the slopes at both ends:
/// `y + h/2 · (f(t, y) + f(t + h, y + h·f(t, y)))`.
///
/// ```
/// use numana::ode::heun_step;
/// // Exact for y' = t (quadratic solution)
/// let y1 = heun_step(0.0, 0.0, 1.0, |t: f64, _y| t);
/// assert!((y1 - 0.5).abs() < 1e-15);
/// ```
pub fn heun_step<T: FloatScalar>(t: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    let k1 = f(t, y);
    let k2 = f(t + h, y + h * k1);
    y + h * half::<T>() * (k1 + k2)
}

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using `f(t, y) -> dy/dt`.
///
/// ```
/// use numana::ode::rk4_step;
///
/// // dy/dt = -y (exponential decay)
/// let y1 = rk4_step(0.0, 1.0, 0.01, |_t, y: f64| -y);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(t: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    let two = T::one() + T::one();
    let half = half::<T>();
    let sixth = T::one() / (two * (two + T::one()));

    let k1 = f(t, y);
    let k2 = f(t + h * half, y + k1 * h * half);
    let k3 = f(t + h * half, y + k2 * h * half);
    let k4 = f(t + h, y + k3 * h);

    y + (k1 + two * k2 + two * k3 + k4) * h * sixth
}

impl FixedStep {
    /// Advance one step with this method.
    pub fn step<T: FloatScalar>(self, t: T, y: T, h: T, f: impl FnMut(T, T) -> T) -> T {
        match self {
            FixedStep::Euler => euler_step(t, y, h, f),
            FixedStep::Heun => heun_step(t, y, h, f),
            FixedStep::Rk4 => rk4_step(t, y, h, f),
        }
    }
}

/// Integrate `y' = f(t, y)` from `t0` to `tf` with a fixed step.
///
/// Only the magnitude of `dt` is used; the direction follows `tf - t0`, so
/// `tf < t0` integrates backward. The last step is shortened to land
/// exactly on `tf`. `tf == t0` returns `y0` after zero steps.
///
/// # Errors
///
/// - [`OdeError::InvalidStep`] if `dt` is zero or not finite, or too small
///   to change `t`.
/// - [`OdeError::InvalidInterval`] if `t0` or `tf` is NaN or infinite.
/// - [`OdeError::StepNotFinite`] if the state becomes NaN or infinite.
///
/// ```
/// use numana::ode::{integrate, FixedStep};
///
/// // y' = -2ty, y(0) = 1  →  y(t) = exp(-t²); run backward from t = 1
/// let y1 = (-1.0_f64).exp();
/// let sol = integrate(FixedStep::Rk4, 1.0, 0.0, 0.001, y1, |t, y| -2.0 * t * y).unwrap();
/// assert!((sol.y - 1.0).abs() < 1e-10);
/// assert_eq!(sol.t, 0.0);
/// ```
pub fn integrate<T: FloatScalar>(
    method: FixedStep,
    t0: T,
    tf: T,
    dt: T,
    y0: T,
    mut f: impl FnMut(T, T) -> T,
) -> Result<Solution<T>, OdeError> {
    if dt == T::zero() || !dt.is_finite() {
        return Err(OdeError::InvalidStep);
    }
    if !t0.is_finite() || !tf.is_finite() {
        return Err(OdeError::InvalidInterval);
    }
    if !y0.is_finite() {
        return Err(OdeError::StepNotFinite);
    }

    let mut t = t0;
    let mut y = y0;
    let mut steps = 0usize;

    if tf == t0 {
        return Ok(Solution { t, y, steps, evals: 0 });
    }

    let forward = tf > t0;
    let h_full = if forward { dt.abs() } else { -dt.abs() };
    // Rounding in `t` must not leave a sliver of a final step
    let slack = dt.abs() * T::epsilon().sqrt();

    loop {
        // Clamp last step
        let mut h = h_full;
        let remaining = tf - t;
        let last = if forward {
            remaining <= h + slack
        } else {
            remaining >= h - slack
        };
        if last {
            h = tf - t;
        } else if t + h == t {
            return Err(OdeError::InvalidStep);
        }

        y = method.step(t, y, h, &mut f);
        steps += 1;
        if !y.is_finite() {
            log_debug!(steps, "state became non-finite");
            return Err(OdeError::StepNotFinite);
        }
        t = if last { tf } else { t + h };
        log_trace!(steps, t = ?t, y = ?y, "fixed step");

        if last {
            break;
        }
    }

    log_debug!(steps, ?method, "fixed-step integration finished");
    Ok(Solution {
        t,
        y,
        steps,
        evals: steps * method.stages(),
    })
}
