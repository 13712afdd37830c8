//! Root finding for scalar functions and nonlinear systems.
//!
//! Requires [`FloatScalar`] (real-valued only). Functions are passed as
//! closures.
//!
//! # Scalar root finding
//!
//! - [`bisection`] — interval halving on a sign-change bracket
//! - [`regula_falsi`] — false position on a sign-change bracket
//! - [`secant`] — secant method from two starting points
//! - [`newton_1d`] — Newton-Raphson with user-supplied derivative
//!
//! # Nonlinear systems
//!
//! - [`newton_system`] — Newton's method for `F(x) = 0`, `F: Rⁿ → Rⁿ`, with an
//!   optional damping factor
//! - [`finite_difference_jacobian`] — forward-difference Jacobian

mod jacobian;
mod newton;
mod root;


pub use jacobian::finite_difference_jacobian;
pub use newton::{newton_system, NewtonSettings};
pub use root::{bisection, newton_1d, regula_falsi, secant, RootSettings};

use crate::dynmatrix::DynVector;

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimError {
    /// Maximum number of iterations exceeded.
    MaxIterations,
    /// Bracket endpoints do not have opposite signs.
    BracketInvalid,
    /// Zero derivative, flat secant, or singular Jacobian.
    Singular,
    /// A computed value was NaN or infinity.
    NotFinite,
    /// The function returned a vector of the wrong length.
    DimensionMismatch { expected: usize, got: usize },
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::MaxIterations => write!(f, "maximum iterations exceeded"),
            OptimError::BracketInvalid => write!(f, "bracket endpoints must have opposite signs"),
            OptimError::Singular => write!(f, "zero derivative or singular jacobian"),
            OptimError::NotFinite => write!(f, "computed value is NaN or infinity"),
            OptimError::DimensionMismatch { expected, got } => {
                write!(f, "function output has length {}, expected {}", got, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OptimError {}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Result of [`newton_system`].
#[derive(Debug, Clone)]
pub struct SystemRootResult<T> {
    /// Approximate root.
    pub x: DynVector<T>,
    /// Euclidean norm of `F(x)` at the root.
    pub residual_norm: T,
    /// Number of Newton steps taken.
    pub iterations: usize,
    /// Number of evaluations of `F`, including those for the Jacobian.
    pub evals: usize,
}
