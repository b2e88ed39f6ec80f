//! # Ordinary least squares
//!
//! Find the `θ` that minimizes `|X·θ - y|` for a design matrix `X` with one input per parameter
//! and one output per observation.
//!
//! The normal equation `Xᵗ·X·θ = Xᵗ·y` simplifies after substituting `X = Q·R`: because `Q` is
//! orthogonal, it reduces to `R·θ = Qᵗ·y`, which back substitution solves.
use log::debug;

use crate::algorithm::qr::QrDecomposition;
use crate::algorithm::triangular_solve::find_input_to_upper_triangular_with;
use crate::config::Tolerances;
use crate::data::linear_algebra::matrix::{Dual, Matrix};
use crate::data::linear_algebra::matrix::ops::apply_to_vector;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::{check_dimension, DenseVector, Vector};
use crate::error::{LinearAlgebraError, Result};

impl<F: Scalar> QrDecomposition<F> {
    /// Least squares solution for the decomposed matrix and observations `y`.
    ///
    /// A single decomposition can serve many observation vectors.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `y` doesn't have one coefficient per output, `Singular` if the
    /// decomposed matrix doesn't have full column rank.
    pub fn solve_least_squares<V: Vector<F = F> + ?Sized>(&self, y: &V) -> Result<DenseVector<F>> {
        check_dimension("ordinary_least_squares", self.q().outs(), y.dimension())?;

        let b = apply_to_vector(&Dual::new(self.q()), y)?;
        find_input_to_upper_triangular_with(self.r(), &b, self.tolerances())
    }
}

/// Estimate `θ` in `y ≈ X·θ` using the default tolerances.
///
/// See `ordinary_least_squares_with`.
pub fn ordinary_least_squares<M, V>(x: &M, y: &V) -> Result<DenseVector<M::F>>
where
    M: Matrix + ?Sized,
    V: Vector<F = M::F> + ?Sized,
{
    ordinary_least_squares_with(x, y, &Tolerances::default())
}

/// Estimate `θ` in `y ≈ X·θ`.
///
/// # Arguments
///
/// * `x`: Design matrix of shape `(p, n)`: `p` parameters and `n >= p` observations.
/// * `y`: Observations, `n` of them.
///
/// # Return value
///
/// The `p` parameters minimizing the sum of squared residuals.
///
/// # Errors
///
/// * `DimensionMismatch` if `y` doesn't have `n` coefficients.
/// * `Underdetermined` if there are fewer observations than parameters.
/// * `Singular` if `x` doesn't have full column rank, so that there is no unique solution.
pub fn ordinary_least_squares_with<M, V>(
    x: &M,
    y: &V,
    tolerances: &Tolerances<M::F>,
) -> Result<DenseVector<M::F>>
where
    M: Matrix + ?Sized,
    V: Vector<F = M::F> + ?Sized,
{
    let (parameters, observations) = x.shape();
    check_dimension("ordinary_least_squares", observations, y.dimension())?;
    if observations < parameters {
        return Err(LinearAlgebraError::Underdetermined { ins: parameters, outs: observations });
    }
    debug!("Estimating {} parameters from {} observations", parameters, observations);

    QrDecomposition::with_tolerances(x, *tolerances)?.solve_least_squares(y)
}
