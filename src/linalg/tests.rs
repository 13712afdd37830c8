use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::*;
use crate::traits::MatrixMut;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn assert_mat_near(a: &DynMatrix<f64>, b: &DynMatrix<f64>, tol: f64) {
    assert_eq!(a.nrows(), b.nrows());
    assert_eq!(a.ncols(), b.ncols());
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                approx_eq(a[(i, j)], b[(i, j)], tol),
                "({}, {}): {} vs {}",
                i,
                j,
                a[(i, j)],
                b[(i, j)]
            );
        }
    }
}

fn sample_3x3() -> DynMatrix<f64> {
    DynMatrix::from_rows(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0])
}

// ── Elimination ─────────────────────────────────────────────────────

#[test]
fn solve_2x2() {
    let a = DynMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
    let b = DynVector::from_slice(&[1.0, 2.0]);
    let x = a.solve(&b).unwrap();
    assert!(approx_eq(x[0], 0.1, 1e-12));
    assert!(approx_eq(x[1], 0.6, 1e-12));
}

#[test]
fn solve_residual() {
    let a = sample_3x3();
    let b = DynVector::from_slice(&[1.0, 0.0, 1.0]);
    let x = a.solve(&b).unwrap();
    let r = &(&a * &x) - &b;
    assert!(r.norm() < 1e-12);
}

#[test]
fn solve_needs_pivoting() {
    // Without row exchange the first pivot would be 1e-20
    let a = DynMatrix::from_rows(2, 2, &[1e-20, 1.0, 1.0, 1.0]);
    let b = DynVector::from_slice(&[1.0, 2.0]);
    let x = a.solve(&b).unwrap();
    assert!(approx_eq(x[0], 1.0, 1e-12));
    assert!(approx_eq(x[1], 1.0, 1e-12));
}

#[test]
fn singular_detected() {
    let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    let b = DynVector::from_slice(&[1.0, 2.0]);
    assert_eq!(a.solve(&b).unwrap_err(), LinalgError::Singular);
    assert_eq!(a.inverse().unwrap_err(), LinalgError::Singular);
    assert_eq!(a.det().unwrap(), 0.0);
}

#[test]
fn near_zero_row_is_singular() {
    let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 1e-12, -1e-12]);
    let b = DynVector::from_slice(&[1.0, 2.0]);
    assert_eq!(a.solve(&b).unwrap_err(), LinalgError::Singular);
}

// ── Determinant ─────────────────────────────────────────────────────

#[test]
fn det_identity() {
    for n in 1..6 {
        assert_eq!(DynMatrix::eye(n, 0.0_f64).det().unwrap(), 1.0);
    }
}

#[test]
fn det_zero_row() {
    let a = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0]);
    assert_eq!(a.det().unwrap(), 0.0);
}

#[test]
fn det_row_swap_negates() {
    let a = sample_3x3();
    let mut swapped = a.clone();
    swapped.swap_rows(0, 2);
    let d = a.det().unwrap();
    assert!(approx_eq(d, 4.0, 1e-12));
    assert!(approx_eq(swapped.det().unwrap(), -d, 1e-12));
}

#[test]
fn det_of_product() {
    let a = sample_3x3();
    let b = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 0.0, 0.0, 1.0, 3.0, 4.0, 0.0, 1.0]);
    let ab = &a * &b;
    let expected = a.det().unwrap() * b.det().unwrap();
    assert!(approx_eq(ab.det().unwrap(), expected, 1e-9));
}

#[test]
fn det_rectangular() {
    let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(a.det().unwrap_err(), LinalgError::NotSquare { nrows: 2, ncols: 3 });
}

// ── Inverse ─────────────────────────────────────────────────────────

#[test]
fn inverse_times_a_is_identity() {
    let a = sample_3x3();
    let inv = a.inverse().unwrap();
    let id = DynMatrix::eye(3, 0.0);
    assert_mat_near(&(&a * &inv), &id, 1e-12);
    assert_mat_near(&(&inv * &a), &id, 1e-12);
}

#[test]
fn inverse_involution() {
    let a = DynMatrix::from_rows(3, 3, &[0.0, 2.0, 1.0, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0]);
    let back = a.inverse().unwrap().inverse().unwrap();
    assert_mat_near(&back, &a, 1e-12);
}

// ── Iterative solvers ───────────────────────────────────────────────

#[test]
fn jacobi_agrees_with_solve() {
    let a = DynMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
    let b = DynVector::from_slice(&[1.0, 2.0]);
    let x0 = DynVector::zeros(2, 0.0);
    let sol = a.jacobi(&b, &x0, &IterativeSettings::default()).unwrap();
    assert!(sol.is_converged());
    assert!(sol.iterations > 1);
    let exact = a.solve(&b).unwrap();
    assert!(sol.x.distance(&exact) < 1e-5);
}

#[test]
fn jacobi_uses_previous_sweep_only() {
    let a = DynMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
    let settings = IterativeSettings { tol: 0.0, max_iter: 2 };
    let sol = jacobi(&a, &[1.0, 2.0], &[0.0, 0.0], &settings).unwrap();
    // Sweep 1: [1/4, 2/3]; sweep 2: [(1 - 2/3)/4, (2 - 2/4)/3]
    assert!(approx_eq(sol.x[0], 1.0 / 12.0, 1e-15));
    assert!(approx_eq(sol.x[1], 0.5, 1e-15));
    assert_eq!(sol.status, Convergence::MaxIterations);
    assert_eq!(sol.iterations, 2);
}

#[test]
fn gauss_seidel_uses_newest_values() {
    let a = DynMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
    let settings = IterativeSettings { tol: 0.0, max_iter: 1 };
    let sol = gauss_seidel(&a, &[1.0, 2.0], &[0.0, 0.0], &settings).unwrap();
    // x1 already sees x0 = 1/4
    assert!(approx_eq(sol.x[0], 0.25, 1e-15));
    assert!(approx_eq(sol.x[1], 0.5, 1e-15));
}

#[test]
fn jacobi_zero_diagonal() {
    let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 0.0]);
    assert_eq!(
        jacobi(&a, &[1.0, 1.0], &[0.0, 0.0], &IterativeSettings::default()).unwrap_err(),
        LinalgError::ZeroDiagonal { row: 1 }
    );
}

#[test]
fn jacobi_diverges_on_weak_diagonal() {
    let a = DynMatrix::from_rows(2, 2, &[1.0, 10.0, 10.0, 1.0]);
    let settings = IterativeSettings { tol: 1e-8, max_iter: 10_000 };
    let sol = jacobi(&a, &[1.0, 1.0], &[0.0, 0.0], &settings).unwrap();
    assert_eq!(sol.status, Convergence::Diverged);
    assert!(sol.x.iter().all(|v: &f64| v.is_finite()));
    assert!(sol.iterations < 10_000);
}

#[test]
fn jacobi_large_but_finite_solution() {
    // ‖x‖² would overflow; the step norm must not
    let a = DynMatrix::eye(2, 0.0_f64);
    let b = [1e160, 0.0];
    let s = IterativeSettings::default();
    let sol = jacobi(&a, &b, &[0.0, 0.0], &s).unwrap();
    assert_eq!(sol.status, Convergence::Converged);
    assert_eq!(sol.iterations, 2);
    assert_eq!(sol.x.as_slice(), &[1e160, 0.0]);

    let sol = gauss_seidel(&a, &b, &[0.0, 0.0], &s).unwrap();
    assert_eq!(sol.status, Convergence::Converged);
    assert_eq!(sol.x.as_slice(), &[1e160, 0.0]);
}

#[test]
fn jacobi_non_convergence_escalates() {
    let a = DynMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
    let settings = IterativeSettings { tol: 1e-14, max_iter: 3 };
    let sol = jacobi(&a, &[1.0, 2.0], &[0.0, 0.0], &settings).unwrap();
    assert!(!sol.is_converged());
    assert_eq!(
        sol.into_converged().unwrap_err(),
        LinalgError::ConvergenceFailure { iterations: 3 }
    );
}

#[test]
fn jacobi_empty_system() {
    let a = DynMatrix::<f64>::zeros(0, 0, 0.0);
    let sol = jacobi(&a, &[], &[], &IterativeSettings::default()).unwrap();
    assert!(sol.is_converged());
    assert_eq!(sol.iterations, 0);
}

#[test]
fn jacobi_shape_errors() {
    let a = DynMatrix::eye(2, 0.0_f64);
    let s = IterativeSettings::default();
    assert_eq!(
        jacobi(&a, &[1.0], &[0.0, 0.0], &s).unwrap_err(),
        LinalgError::DimensionMismatch { expected: 2, got: 1 }
    );
    assert_eq!(
        gauss_seidel(&a, &[1.0, 1.0], &[0.0], &s).unwrap_err(),
        LinalgError::DimensionMismatch { expected: 2, got: 1 }
    );
    assert!(jacobi(&a, &[1.0], &[0.0, 0.0], &s).unwrap_err().is_degenerate_input());
}

#[test]
fn iterative_f32() {
    let a = DynMatrix::from_rows(2, 2, &[4.0_f32, 1.0, 2.0, 3.0]);
    let sol = jacobi(&a, &[1.0, 2.0], &[0.0, 0.0], &IterativeSettings::default()).unwrap();
    assert!(sol.is_converged());
    assert!((sol.x[1] - 0.6).abs() < 1e-3);
}

// ── Eigenvalues ─────────────────────────────────────────────────────

#[test]
fn power_iteration_diag() {
    let a = DynMatrix::from_diag(&DynVector::from_slice(&[5.0, 2.0, 1.0]));
    let v0 = DynVector::from_slice(&[1.0, 1.0, 1.0]);
    let big = a.power_iteration(&v0, &PowerSettings::default()).unwrap();
    assert!(approx_eq(big.value, 5.0, 1e-8));
    let small = a.smallest_eigenvalue(&v0, &PowerSettings::default()).unwrap();
    assert!(approx_eq(small.value, 1.0, 1e-8));
}

#[test]
fn power_iteration_symmetric() {
    // Eigenvalues 2 - √2, 2, 2 + √2
    let a = sample_3x3();
    let v0 = DynVector::from_slice(&[1.0, 0.0, 0.0]);
    let big = a.power_iteration(&v0, &PowerSettings::default()).unwrap();
    assert!(approx_eq(big.value, 2.0 + core::f64::consts::SQRT_2, 1e-8));
    let small = a.smallest_eigenvalue(&v0, &PowerSettings::default()).unwrap();
    assert!(approx_eq(small.value, 2.0 - core::f64::consts::SQRT_2, 1e-8));

    // A v = λ v for the returned vector
    let av = &a * &big.vector;
    let lv = &big.vector * big.value;
    assert!(av.distance(&lv) < 1e-6);
}

// ── Idempotence ─────────────────────────────────────────────────────

#[test]
fn operations_are_repeatable() {
    let a = sample_3x3();
    let b = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(a.solve(&b).unwrap(), a.solve(&b).unwrap());
    assert_eq!(a.det().unwrap(), a.det().unwrap());
    assert_eq!(a.inverse().unwrap(), a.inverse().unwrap());
    let v0 = DynVector::from_slice(&[1.0, 1.0, 1.0]);
    let s = PowerSettings::default();
    assert_eq!(a.power_iteration(&v0, &s).unwrap(), a.power_iteration(&v0, &s).unwrap());
}

#[test]
fn error_display() {
    use alloc::string::ToString;
    assert_eq!(LinalgError::Singular.to_string(), "matrix is singular");
    assert_eq!(
        LinalgError::ZeroDiagonal { row: 2 }.to_string(),
        "zero diagonal entry in row 2"
    );
    assert!(!LinalgError::Singular.is_degenerate_input());
    assert!(!LinalgError::ConvergenceFailure { iterations: 1 }.is_degenerate_input());
    assert_eq!(LinalgError::NotFinite.to_string(), "vector contains NaN or infinity");
}
