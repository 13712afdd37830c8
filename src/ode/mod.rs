//! Fixed-step integration of scalar initial value problems `y' = f(t, y)`.
//!
//! | Method               | Order | `f` evaluations per step |
//! |----------------------|-------|--------------------------|
//! | [`FixedStep::Euler`] | 1     | 1                        |
//! | [`FixedStep::Heun`]  | 2     | 2                        |
//! | [`FixedStep::Rk4`]   | 4     | 4                        |
//!
//! The single-step functions [`euler_step`], [`heun_step`] and [`rk4_step`]
//! advance from `t` to `t + h`; [`integrate`] marches from `t0` to `tf`.
//! No allocation: all stage values are locals.
//!
//! # Example
//!
//! ```
//! use numana::ode::{integrate, FixedStep};
//!
//! // y' = y, y(0) = 1  →  y(1) = e
//! let sol = integrate(FixedStep::Rk4, 0.0, 1.0, 0.01, 1.0, |_t, y| y).unwrap();
//! assert!((sol.y - core::f64::consts::E).abs() < 1e-9);
//! assert_eq!(sol.steps, 100);
//! ```

mod fixed;

use core::fmt;

#[cfg(test)]
mod tests;

pub use fixed::{euler_step, heun_step, integrate, rk4_step};

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OdeError {
    /// Step size is zero, not finite, or too small to advance `t`.
    InvalidStep,
    /// The state became non-finite (NaN / Inf).
    StepNotFinite,
    /// `t0` or `tf` is NaN or infinite.
    InvalidInterval,
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep => write!(f, "step size must be finite and non-zero"),
            Self::StepNotFinite => write!(f, "state is not finite"),
            Self::InvalidInterval => write!(f, "integration interval must have finite endpoints"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OdeError {}

/// Fixed-step explicit method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedStep {
    /// Forward Euler.
    Euler,
    /// Heun's method: Euler predictor, trapezoid corrector (RK2).
    Heun,
    /// Classic 4th-order Runge-Kutta.
    Rk4,
}

impl FixedStep {
    /// Order of accuracy.
    pub fn order(self) -> usize {
        match self {
            FixedStep::Euler => 1,
            FixedStep::Heun => 2,
            FixedStep::Rk4 => 4,
        }
    }

    /// Derivative evaluations per step.
    pub fn stages(self) -> usize {
        match self {
            FixedStep::Euler => 1,
            FixedStep::Heun => 2,
            FixedStep::Rk4 => 4,
        }
    }
}

/// Result of [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final independent variable value (equal to `tf`).
    pub t: T,
    /// State at `t`.
    pub y: T,
    /// Steps taken, including the clamped last step.
    pub steps: usize,
    /// Total derivative evaluations.
    pub evals: usize,
}
