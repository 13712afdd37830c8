use crate::linalg::{check_len, check_square, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Forward elimination with partial pivoting shared by solve and determinant.
///
/// Reduces `a` to upper-triangular form, applying the same row swaps and
/// row operations to `rhs` when one is given. Entries below the diagonal
/// are set to zero. Returns `true` if the number of row swaps was even.
fn forward_eliminate<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    mut rhs: Option<&mut [T]>,
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    let threshold = T::pivot_threshold();
    let mut even = true;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        // Written as a negated `>=` so a NaN pivot is rejected too
        if !(max_val >= threshold) {
            log_debug!(col, "pivot below threshold, matrix is singular");
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            a.swap_rows(col, max_row);
            if let Some(b) = rhs.as_deref_mut() {
                b.swap(col, max_row);
            }
            even = !even;
        }

        let pivot = *a.get(col, col);
        for row in (col + 1)..n {
            let factor = *a.get(row, col) / pivot;
            if factor == T::zero() {
                continue;
            }
            *a.get_mut(row, col) = T::zero();
            for j in (col + 1)..n {
                let v = *a.get(col, j);
                let cell = a.get_mut(row, j);
                *cell = *cell - factor * v;
            }
            if let Some(b) = rhs.as_deref_mut() {
                b[row] = b[row] - factor * b[col];
            }
        }
    }

    Ok(even)
}

/// Gaussian elimination with partial pivoting, in place.
///
/// On return `a` holds the upper-triangular factor U and `b` the
/// correspondingly transformed right-hand side, ready for
/// [`back_substitute`]. Both are overwritten.
///
/// Returns `true` if the number of row swaps was even.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] / [`LinalgError::DimensionMismatch`] for bad shapes.
/// - [`LinalgError::Singular`] if a pivot magnitude falls below
///   [`FloatScalar::pivot_threshold`]. `a` and `b` are left partially reduced.
///
/// ```
/// use numana::DynMatrix;
/// use numana::linalg::{back_substitute, gauss_eliminate_in_place};
///
/// let mut a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// let mut b = [5.0, 6.0];
/// gauss_eliminate_in_place(&mut a, &mut b).unwrap();
/// assert_eq!(a[(1, 0)], 0.0);
///
/// let mut x = [0.0; 2];
/// back_substitute(&a, &b, &mut x);
/// assert!((x[0] + 4.0).abs() < 1e-12);
/// assert!((x[1] - 4.5).abs() < 1e-12);
/// ```
pub fn gauss_eliminate_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    b: &mut [T],
) -> Result<bool, LinalgError> {
    let n = check_square(&*a)?;
    check_len(n, b.len())?;
    forward_eliminate(a, Some(b))
}

/// Solve `Ux = y` for upper-triangular `U`, from row n-1 up to row 0.
///
/// `u` is the reduced matrix from [`gauss_eliminate_in_place`]; its diagonal
/// is assumed to be non-zero.
pub fn back_substitute<T: FloatScalar>(u: &impl MatrixRef<T>, y: &[T], x: &mut [T]) {
    let n = u.nrows();
    assert_eq!(y.len(), n, "rhs length mismatch");
    assert_eq!(x.len(), n, "solution length mismatch");

    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum = sum - *u.get(i, j) * x[j];
        }
        x[i] = sum / *u.get(i, i);
    }
}

/// Determinant by pivoted elimination, in place.
///
/// `a` is overwritten with its upper-triangular reduction. A pivot below the
/// singularity threshold yields exactly zero, which is a valid determinant
/// and not an error. The 0×0 determinant is 1.
///
/// # Errors
///
/// [`LinalgError::NotSquare`] if `a` is not square.
pub fn determinant_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) -> Result<T, LinalgError> {
    let n = check_square(&*a)?;
    let even = match forward_eliminate(a, None) {
        Ok(even) => even,
        Err(LinalgError::Singular) => return Ok(T::zero()),
        Err(e) => return Err(e),
    };
    let sign = if even { T::one() } else { -T::one() };
    Ok((0..n).fold(sign, |d, i| d * *a.get(i, i)))
}
