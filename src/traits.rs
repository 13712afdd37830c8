use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `abs`, `sqrt` or ordered comparisons:
/// elimination with pivoting, norms, iteration and the scalar solvers.
pub trait FloatScalar: Scalar + Float {
    /// Pivot magnitude below which a matrix is treated as singular.
    ///
    /// `1e-10` for both `f32` and `f64`.
    #[inline]
    fn pivot_threshold() -> Self {
        Self::from(1e-10).unwrap_or_else(Self::epsilon)
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Kernel routines are written against this trait so they work on any
/// row-major storage, not only [`DynMatrix`](crate::DynMatrix).
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Whether the matrix is square.
    #[inline]
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (elimination, Gauss-Jordan) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Exchange rows `a` and `b`.
    ///
    /// The default swaps element by element; contiguous storage should
    /// override it with a slice swap.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}
