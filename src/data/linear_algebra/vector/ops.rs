//! # Operators on vectors
use num_traits::{Float, Zero};

use crate::data::linear_algebra::vector::{check_dimension, DenseVector, Vector, VectorMut};
use crate::error::{LinearAlgebraError, Result};

/// Inner product of two vectors of the same dimension.
///
/// # Errors
///
/// `DimensionMismatch` if the dimensions differ.
pub fn dot_product<A, B>(a: &A, b: &B) -> Result<A::F>
where
    A: Vector + ?Sized,
    B: Vector<F = A::F> + ?Sized,
{
    check_dimension("dot_product", a.dimension(), b.dimension())?;

    (0..a.dimension())
        .map(|d| -> Result<A::F> { Ok(a.get(d)? * b.get(d)?) })
        .sum()
}

/// Euclidean length: the square root of the sum of squared coefficients.
///
/// Coefficients are divided by the largest magnitude before squaring, so the result is finite
/// and nonzero whenever it can be represented, also when squares would overflow or underflow.
pub fn l2_norm<V: Vector + ?Sized>(v: &V) -> Result<V::F> {
    let mut scale = V::F::zero();
    for d in 0..v.dimension() {
        scale = scale.max(v.get(d)?.abs());
    }
    // All zero, or infinite or NaN coefficients: nothing to scale
    if scale.is_zero() || !scale.is_finite() {
        return dot_product(v, v).map(|squared| squared.sqrt());
    }

    let sum = (0..v.dimension())
        .map(|d| -> Result<V::F> {
            let scaled = v.get(d)? / scale;
            Ok(scaled * scaled)
        })
        .sum::<Result<V::F>>()?;

    Ok(scale * sum.sqrt())
}

/// Copy of `v` scaled to unit length.
///
/// # Errors
///
/// `ZeroVector` if `v` has length zero; there is no direction to keep. `NonFinite` if a
/// coefficient is NaN or infinite.
pub fn normalize<V: Vector + ?Sized>(v: &V) -> Result<DenseVector<V::F>> {
    let mut result = DenseVector::zeros(v.dimension());
    normalize_into(v, &mut result)?;

    Ok(result)
}

/// Write `v` scaled to unit length into `target`.
///
/// # Errors
///
/// `DimensionMismatch` if the dimensions differ, `ZeroVector` if `v` has length zero, `NonFinite`
/// if a coefficient is NaN or infinite.
pub fn normalize_into<V, T>(v: &V, target: &mut T) -> Result<()>
where
    V: Vector + ?Sized,
    T: VectorMut<F = V::F> + ?Sized,
{
    check_dimension("normalize_into", v.dimension(), target.dimension())?;

    let norm = l2_norm(v)?;
    if !norm.is_finite() {
        return Err(LinearAlgebraError::NonFinite { operation: "normalize" });
    }
    if norm.is_zero() {
        return Err(LinearAlgebraError::ZeroVector { operation: "normalize" });
    }

    for d in 0..v.dimension() {
        target.set(d, v.get(d)? / norm)?;
    }

    Ok(())
}
