//! Interpolation on equally spaced knots.
//!
//! [`NewtonForward`] builds the forward-difference table of the data once and
//! evaluates Newton's forward-difference polynomial at arbitrary points.
//! Queries outside the knot range extrapolate with the same polynomial.
//!
//! # Examples
//!
//! ```
//! use numana::interp::NewtonForward;
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [1.0, 2.0, 5.0, 10.0]; // x² + 1
//! let p = NewtonForward::new(&xs, &ys).unwrap();
//! assert!((p.eval(1.5) - 3.25).abs() < 1e-12);
//! ```

mod newton_forward;


pub use newton_forward::NewtonForward;

use crate::traits::FloatScalar;

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Fewer than two data points.
    TooFewPoints,
    /// The `xs` array is not strictly increasing.
    NotSorted,
    /// `xs` and `ys` have different lengths.
    LengthMismatch,
    /// Knot spacing is not uniform.
    NotEquallySpaced,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
            InterpError::NotEquallySpaced => write!(f, "x values must be equally spaced"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Validate that a slice is strictly increasing.
fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        // Negated so NaN knots are rejected too
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Validate uniform spacing and return the step `h`.
///
/// Spacing may deviate from the first interval by a relative `sqrt(ε)`,
/// which admits knots like `0.1 * i` computed in floating point, plus a few
/// ulps of the largest knot, which admits small steps far from the origin.
fn validate_spacing<T: FloatScalar>(xs: &[T]) -> Result<T, InterpError> {
    debug_assert!(xs.len() >= 2);
    let h = xs[1] - xs[0];
    // Sorted, so the largest magnitude sits at an end
    let scale = xs[0].abs().max(xs[xs.len() - 1].abs());
    let four = (T::one() + T::one()) * (T::one() + T::one());
    let tol = h * T::epsilon().sqrt() + four * T::epsilon() * scale;
    for w in xs.windows(2) {
        if ((w[1] - w[0]) - h).abs() > tol {
            return Err(InterpError::NotEquallySpaced);
        }
    }
    Ok(h)
}
