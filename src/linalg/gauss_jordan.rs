use crate::linalg::{check_square, LinalgError};
use crate::traits::{FloatScalar, MatrixMut};

/// Matrix inverse by Gauss-Jordan elimination with partial pivoting.
///
/// `inv` plays the role of the augmented right half `[A | I]`: it is reset
/// to the identity, then receives every row swap, normalization and
/// elimination applied to `a`. On success `a` has been reduced to the
/// identity and `inv` holds `A⁻¹`. Both matrices are overwritten.
///
/// Unlike forward elimination, each pivot row is used to clear its column
/// in *all* other rows, above and below.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] if `a` is not square.
/// - [`LinalgError::DimensionMismatch`] if `inv` is not the same size as `a`.
/// - [`LinalgError::Singular`] if a pivot magnitude falls below
///   [`FloatScalar::pivot_threshold`].
///
/// ```
/// use numana::DynMatrix;
/// use numana::linalg::gauss_jordan_in_place;
///
/// let mut a = DynMatrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
/// let mut inv = DynMatrix::zeros(2, 2, 0.0);
/// gauss_jordan_in_place(&mut a, &mut inv).unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
/// ```
pub fn gauss_jordan_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    inv: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let n = check_square(&*a)?;
    if inv.nrows() != n || inv.ncols() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: inv.nrows(),
        });
    }

    for i in 0..n {
        for j in 0..n {
            *inv.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    let threshold = T::pivot_threshold();

    for i in 0..n {
        let mut pivot_row = i;
        let mut max_val = a.get(i, i).abs();
        for row in (i + 1)..n {
            let val = a.get(row, i).abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }

        if !(max_val >= threshold) {
            log_debug!(row = i, "pivot below threshold, matrix cannot be inverted");
            return Err(LinalgError::Singular);
        }

        a.swap_rows(i, pivot_row);
        inv.swap_rows(i, pivot_row);

        // Normalize the pivot row of both halves
        let div = *a.get(i, i);
        for k in 0..n {
            *a.get_mut(i, k) = *a.get(i, k) / div;
            *inv.get_mut(i, k) = *inv.get(i, k) / div;
        }

        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = *a.get(j, i);
            if factor == T::zero() {
                continue;
            }
            for k in 0..n {
                *a.get_mut(j, k) = *a.get(j, k) - factor * *a.get(i, k);
                *inv.get_mut(j, k) = *inv.get(j, k) - factor * *inv.get(i, k);
            }
        }
    }

    Ok(())
}
