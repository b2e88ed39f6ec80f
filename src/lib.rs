//! # Dense linear maps
//!
//! Matrices and vectors are treated as linear maps and coefficient sequences under an assumed
//! basis. Storage is dense; sub-rectangles and transposes are views that alias the storage of
//! their parent instead of copying it.
//!
//! On top of that, this crate computes QR decompositions using Householder reflections, solves
//! upper triangular systems by back substitution and estimates ordinary least squares models.
//!
//! ```
//! use linmap::{DenseMatrix, DenseVector, ordinary_least_squares};
//!
//! // Two parameters, three observations
//! let x = DenseMatrix::from_data(vec![
//!     vec![1f64, 0f64],
//!     vec![1f64, 2f64],
//!     vec![-2f64, 1f64],
//! ])?;
//! let y = DenseVector::new(vec![6f64, 0f64, -15f64]);
//!
//! let theta = ordinary_least_squares(&x, &y)?;
//! assert!((theta.data()[0] - 6f64).abs() < 1e-9);
//! assert!((theta.data()[1] + 3f64).abs() < 1e-9);
//! # Ok::<(), linmap::LinearAlgebraError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;

pub use algorithm::least_squares::{ordinary_least_squares, ordinary_least_squares_with};
pub use algorithm::qr::{decompose_qr, decompose_qr_with, QrDecomposition};
pub use algorithm::triangular_solve::{
    find_input_to_upper_triangular,
    find_input_to_upper_triangular_with,
};
pub use config::Tolerances;
pub use data::linear_algebra::matrix::{DenseMatrix, Matrix, MatrixMut};
pub use data::linear_algebra::vector::{DenseVector, Vector, VectorMut};
pub use error::{LinearAlgebraError, Result};
