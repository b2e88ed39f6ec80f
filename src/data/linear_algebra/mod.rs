//! # Linear algebra primitives
//!
//! Dense vectors and matrices, views on them, and the elementary operators that the algorithms
//! in `crate::algorithm` are built from.

pub mod matrix;
pub mod traits;
pub mod vector;

/// Magnitude below which a value is treated as zero by default.
pub const EPSILON: f64 = 1e-9;
