use alloc::vec;
use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

// ── Matrix-vector multiplication ────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Matrix-vector product `A·v`.
    ///
    /// Panics if `v.len() != self.ncols()`.
    ///
    /// ```
    /// use numana::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let v = DynVector::from_slice(&[1.0, 1.0]);
    /// let av = a.mul_vec(&v);
    /// assert_eq!(av.as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn mul_vec(&self, v: &DynVector<T>) -> DynVector<T> {
        assert_eq!(
            self.ncols,
            v.len(),
            "dimension mismatch: {}x{} * {}",
            self.nrows,
            self.ncols,
            v.len(),
        );
        let data = (0..self.nrows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v.iter())
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect();
        DynVector { data }
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use numana::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

impl<T: Scalar> Mul<&DynVector<T>> for &DynMatrix<T> {
    type Output = DynVector<T>;

    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        self.mul_vec(rhs)
    }
}

// ── Element-wise vector arithmetic ──────────────────────────────────

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        let data = self.iter().zip(rhs.iter()).map(|(&a, &b)| a - b).collect();
        DynVector { data }
    }
}

impl<T: Scalar> Add<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        let data = self.iter().zip(rhs.iter()).map(|(&a, &b)| a + b).collect();
        DynVector { data }
    }
}

impl<T: Scalar> Mul<T> for &DynVector<T> {
    type Output = DynVector<T>;

    fn mul(self, rhs: T) -> DynVector<T> {
        let data = self.iter().map(|&a| a * rhs).collect();
        DynVector { data }
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &DynVector<T> {
    type Output = DynVector<T>;

    fn neg(self) -> DynVector<T> {
        let data = self.iter().map(|&a| -a).collect();
        DynVector { data }
    }
}
