use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{validate_sorted, validate_spacing, InterpError};

/// Newton forward-difference interpolating polynomial.
///
/// For knots `x_i = x₀ + i·h` the polynomial through all `n` points is
///
/// `p(x) = Σ_{k=0}^{n-1} C(u, k) · Δᵏy₀`, with `u = (x − x₀) / h`
///
/// where `C(u, k) = u(u−1)…(u−k+1) / k!` and `Δᵏy₀` is the `k`-th forward
/// difference at the first knot. Construction is O(n²); evaluation is O(n)
/// using nested multiplication.
///
/// # Example
///
/// ```
/// use numana::interp::NewtonForward;
///
/// let p = NewtonForward::new(&[0.0_f64, 0.5, 1.0], &[0.0, 0.25, 1.0]).unwrap();
/// assert_eq!(p.degree(), 2);
/// assert!((p.eval(0.8) - 0.64).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonForward<T> {
    x0: T,
    h: T,
    /// Leading forward differences `Δᵏy₀`, `k = 0..n`.
    diffs: Vec<T>,
}

impl<T: FloatScalar> NewtonForward<T> {
    /// Build the interpolant from equally spaced, strictly increasing knots.
    ///
    /// # Errors
    ///
    /// - [`InterpError::LengthMismatch`] if `xs` and `ys` differ in length.
    /// - [`InterpError::TooFewPoints`] with fewer than two points.
    /// - [`InterpError::NotSorted`] unless `xs` is strictly increasing.
    /// - [`InterpError::NotEquallySpaced`] if the spacing varies.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(xs)?;
        let h = validate_spacing(xs)?;

        // Collapse the table column by column, keeping the top entry of each
        let n = ys.len();
        let mut column = ys.to_vec();
        let mut diffs = Vec::with_capacity(n);
        for k in 0..n {
            diffs.push(column[0]);
            for i in 0..(n - k - 1) {
                column[i] = column[i + 1] - column[i];
            }
        }

        Ok(Self { x0: xs[0], h, diffs })
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: T) -> T {
        let u = (x - self.x0) / self.h;
        let n = self.diffs.len();

        // d₀ + u/1·(d₁ + (u−1)/2·(d₂ + …))
        let mut k = (1..n).fold(T::zero(), |acc, _| acc + T::one());
        let mut acc = self.diffs[n - 1];
        for &d in self.diffs[..n - 1].iter().rev() {
            k = k - T::one();
            acc = d + (u - k) / (k + T::one()) * acc;
        }
        acc
    }

    /// Degree of the polynomial (number of knots minus one).
    pub fn degree(&self) -> usize {
        self.diffs.len() - 1
    }

    /// Knot spacing `h`.
    pub fn step(&self) -> T {
        self.h
    }

    /// Leading forward differences `[y₀, Δy₀, Δ²y₀, …]`.
    pub fn differences(&self) -> &[T] {
        &self.diffs
    }
}
