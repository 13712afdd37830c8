//! Type aliases for the real element types the kernel works with.

use super::{DynMatrix, DynVector};

/// Dynamic matrix with `f32` elements.
pub type DynMatrixf32 = DynMatrix<f32>;
/// Dynamic matrix with `f64` elements.
pub type DynMatrixf64 = DynMatrix<f64>;

/// Dynamic vector with `f32` elements.
pub type DynVectorf32 = DynVector<f32>;
/// Dynamic vector with `f64` elements.
pub type DynVectorf64 = DynVector<f64>;
