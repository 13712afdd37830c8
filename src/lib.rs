//! # numana
//!
//! Classical numerical analysis in pure Rust, no-std compatible (requires
//! `alloc`). The core is a small dense linear-algebra kernel: pivoted Gaussian
//! elimination, Gauss-Jordan inversion, Jacobi iteration and power iteration.
//!
//! ## Quick start
//!
//! ```
//! use numana::{DynMatrix, DynVector};
//!
//! // Solve a linear system Ax = b
//! let a = DynMatrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = DynVector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions and
//!   row-major `Vec<T>` storage. Implements [`MatrixRef`] / [`MatrixMut`], so
//!   the linalg free functions work on it directly. [`DynVector<T>`] for
//!   single-index vector access, norms and normalization.
//!
//! - [`linalg`] — The kernel. Gaussian elimination with partial pivoting
//!   (`solve`, `det`), Gauss-Jordan inverse, Jacobi and Gauss-Seidel iteration,
//!   power iteration for the dominant eigenvalue. Free functions operate on
//!   `&mut impl MatrixMut<T>` in place; the methods on `DynMatrix` work on a
//!   private copy.
//!
//! - [`optim`] — Scalar root finding ([`optim::bisection`], [`optim::secant`],
//!   [`optim::regula_falsi`], [`optim::newton_1d`]) and Newton's method for
//!   nonlinear systems ([`optim::newton_system`]). Requires `optim` feature.
//!
//! - [`ode`] — Fixed-step Euler, Heun (RK2) and RK4 for scalar IVPs.
//!   Requires `ode` feature.
//!
//! - [`interp`] — Newton forward-difference interpolation on equally spaced
//!   knots. Requires `interp` feature.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by every algorithm
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |
//! | `optim`   | yes      | Root finding and nonlinear systems |
//! | `ode`     | yes      | Fixed-step ODE integration |
//! | `interp`  | yes      | Newton forward-difference interpolation |
//! | `tracing` | no       | `tracing` events from the iterative routines |
//! | `all`     | no       | All of the above except `libm` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod dynmatrix;
#[cfg(feature = "interp")]
pub mod interp;
pub mod linalg;
#[cfg(feature = "ode")]
pub mod ode;
#[cfg(feature = "optim")]
pub mod optim;
pub mod traits;

pub use dynmatrix::{DynMatrix, DynMatrixf32, DynMatrixf64, DynVector, DynVectorf32, DynVectorf64};
pub use linalg::{Convergence, EigenEstimate, IterativeSettings, IterativeSolution, LinalgError, PowerSettings};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
