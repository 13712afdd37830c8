use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

/// Euclidean norm of a sequence, scaled by its largest magnitude so that
/// entries near the overflow limit square without overflowing.
///
/// NaN anywhere gives NaN; an infinite entry gives infinity.
pub(crate) fn scaled_l2<T: FloatScalar>(values: impl Iterator<Item = T> + Clone) -> T {
    let scale = values.clone().fold(T::zero(), |m, x| {
        let a = x.abs();
        if a > m || a.is_nan() {
            a
        } else {
            m
        }
    });
    if scale == T::zero() || !scale.is_finite() {
        return scale;
    }
    let sum = values.fold(T::zero(), |acc, x| {
        let r = x / scale;
        acc + r * r
    });
    scale * sum.sqrt()
}

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar> DynVector<T> {
    /// Squared L2 norm (dot product with self).
    ///
    /// ```
    /// use numana::DynVector;
    /// let v = DynVector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.norm_squared(), 25.0);
    /// ```
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> DynVector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use numana::DynVector;
    /// let v = DynVector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        scaled_l2(self.iter().copied())
    }

    /// L1 norm (sum of absolute values).
    ///
    /// ```
    /// use numana::DynVector;
    /// let v = DynVector::from_slice(&[1.0_f64, -2.0, 3.0]);
    /// assert!((v.norm_l1() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_l1(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x.abs())
    }

    /// Return a unit vector in the same direction.
    ///
    /// Returns `None` if the norm is zero (or not finite), instead of
    /// filling the result with NaN.
    ///
    /// ```
    /// use numana::DynVector;
    /// let v = DynVector::from_slice(&[3.0_f64, 4.0]);
    /// let u = v.normalize().unwrap();
    /// assert!((u.norm() - 1.0).abs() < 1e-12);
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    ///
    /// assert!(DynVector::zeros(2, 0.0_f64).normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Self> {
        let n = self.norm();
        if n == T::zero() || !n.is_finite() {
            return None;
        }
        let data = self.iter().map(|&x| x / n).collect();
        Some(DynVector { data })
    }

    /// L1 distance `Σ |a_i - b_i|`.
    pub fn distance_l1(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + (a - b).abs())
    }

    /// Euclidean distance `‖a - b‖₂`.
    pub fn distance(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        scaled_l2(self.iter().zip(rhs.iter()).map(|(&a, &b)| a - b))
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Frobenius norm (square root of sum of squares).
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        scaled_l2(self.as_slice().iter().copied())
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        (0..self.nrows())
            .map(|i| self.row(i).iter().fold(T::zero(), |acc, &x| acc + x.abs()))
            .fold(T::zero(), T::max)
    }
}
