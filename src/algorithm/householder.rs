//! # Householder reflections
//!
//! A Householder reflection maps a vector `x` onto a multiple of a target direction `e` with the
//! same length as `x`, by reflecting over the hyperplane that bisects the two. The reflection is
//! orthogonal and symmetric: it is its own inverse.
use itertools::iproduct;
use num_traits::{Float, One, Zero};

use crate::data::linear_algebra::matrix::{DenseMatrix, MatrixMut};
use crate::data::linear_algebra::vector::{check_dimension, DenseVector, Vector, VectorMut};
use crate::data::linear_algebra::vector::ops::{l2_norm, normalize};
use crate::error::{LinearAlgebraError, Result};

/// Reflection that takes `x` to a vector in the direction of `e` with the length of `x`.
///
/// See `householder_into`.
pub fn householder<X, E>(x: &X, e: &E) -> Result<DenseMatrix<X::F>>
where
    X: Vector + ?Sized,
    E: Vector<F = X::F> + ?Sized,
{
    let dimension = x.dimension();
    let mut result = DenseMatrix::zeros(dimension, dimension);
    householder_into(x, e, &mut result)?;

    Ok(result)
}

/// Write the reflection that takes `x` to a vector in the direction of `e` into `target`.
///
/// With `mag = |x|` and `sign` the sign of `x[0]` (positive for zero), the reflection is
/// `I - 2·v·vᵗ` for `v = normalize(x + sign·mag·e)`. Shifting along the sign of `x[0]` never
/// subtracts nearly equal values, so `v` is accurate even when `x` is almost parallel to `e`. The
/// image of `x` is `-sign·mag·e`.
///
/// Writing into a `Slice` of an identity matrix gives the reflection embedded in a larger space.
///
/// # Arguments
///
/// * `x`: Vector to reflect.
/// * `e`: Unit vector giving the target direction, usually a basis vector.
/// * `target`: Square matrix with the dimension of `x` as its size. Every entry is overwritten.
///
/// # Errors
///
/// * `DimensionMismatch` if `x` and `e` differ in dimension.
/// * `ShapeMismatch` if `target` isn't square of the right size.
/// * `ZeroVector` if `x` is zero; there is nothing to reflect.
/// * `NonFinite` if `x` contains NaN or an infinity.
pub fn householder_into<X, E, T>(x: &X, e: &E, target: &mut T) -> Result<()>
where
    X: Vector + ?Sized,
    E: Vector<F = X::F> + ?Sized,
    T: MatrixMut<F = X::F> + ?Sized,
{
    let dimension = x.dimension();
    check_dimension("householder", dimension, e.dimension())?;
    if target.shape() != (dimension, dimension) {
        return Err(LinearAlgebraError::ShapeMismatch {
            operation: "householder_into",
            left: (dimension, dimension),
            right: target.shape(),
        });
    }
    if dimension == 0 {
        return Err(LinearAlgebraError::ZeroVector { operation: "householder" });
    }

    let magnitude = l2_norm(x)?;
    if !magnitude.is_finite() {
        return Err(LinearAlgebraError::NonFinite { operation: "householder" });
    }
    let sign = if x.get(0)? >= X::F::zero() { X::F::one() } else { -X::F::one() };

    let mut shifted = DenseVector::zeros(dimension);
    for d in 0..dimension {
        shifted.set(d, x.get(d)? + sign * magnitude * e.get(d)?)?;
    }
    let v = normalize(&shifted)?;

    let two = X::F::one() + X::F::one();
    for (output, input) in iproduct!(0..dimension, 0..dimension) {
        let delta = if input == output { X::F::one() } else { X::F::zero() };
        target.set(input, output, delta - two * v.get(output)? * v.get(input)?)?;
    }

    Ok(())
}
