//! # Back substitution
//!
//! Solving `A·x = b` for upper triangular `A`, computing the coefficients of `x` from the last to
//! the first with one division each.
use log::{debug, trace, warn};
use num_traits::Float;

use crate::config::Tolerances;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::{check_dimension, DenseVector, Vector, VectorMut};
use crate::error::{LinearAlgebraError, Result};

/// Check that all entries below the diagonal are at most `tolerance` away from zero.
///
/// # Errors
///
/// `NotUpperTriangular` naming the first offending entry, scanning input by input. A NaN below
/// the diagonal is offending.
pub fn check_upper_triangular<M: Matrix + ?Sized>(a: &M, tolerance: M::F) -> Result<()> {
    let (ins, outs) = a.shape();
    for input in 0..ins {
        for output in input + 1..outs {
            let value = a.get(input, output)?;
            if value.is_nan() || value.abs() > tolerance {
                return Err(LinearAlgebraError::NotUpperTriangular { input, output });
            }
        }
    }

    Ok(())
}

/// Find the `x` for which `A·x = b` with the default tolerances.
///
/// See `find_input_to_upper_triangular_into`.
pub fn find_input_to_upper_triangular<M, V>(a: &M, b: &V) -> Result<DenseVector<M::F>>
where
    M: Matrix + ?Sized,
    V: Vector<F = M::F> + ?Sized,
{
    find_input_to_upper_triangular_with(a, b, &Tolerances::default())
}

/// Find the `x` for which `A·x = b`.
///
/// See `find_input_to_upper_triangular_into`.
pub fn find_input_to_upper_triangular_with<M, V>(
    a: &M,
    b: &V,
    tolerances: &Tolerances<M::F>,
) -> Result<DenseVector<M::F>>
where
    M: Matrix + ?Sized,
    V: Vector<F = M::F> + ?Sized,
{
    let mut x = DenseVector::zeros(a.ins());
    find_input_to_upper_triangular_into(a, b, &mut x, tolerances)?;

    Ok(x)
}

/// Write the `x` for which `A·x = b` into `target`.
///
/// Only the first `ins` coefficients of `b` take part. When `A` has more outputs than inputs, the
/// remaining coefficients of `b` are what no `x` can reach.
///
/// # Arguments
///
/// * `a`: Upper triangular matrix of shape `(ins, outs)` with `outs >= ins`.
/// * `b`: Vector with `outs` coefficients.
/// * `target`: Vector with `ins` coefficients. All of them are overwritten on success.
/// * `tolerances`: Sub-diagonal entries up to `zero` are accepted, diagonal entries below
/// `singular` in magnitude are not.
///
/// # Errors
///
/// In the order in which they are checked:
///
/// * `Underdetermined` if `outs < ins`.
/// * `DimensionMismatch` if `b` or `target` has the wrong dimension.
/// * `InvalidTolerance` if the tolerances don't validate.
/// * `NotUpperTriangular` if `a` has a non negligible entry below the diagonal.
/// * `Singular` if a diagonal entry is NaN or too small to divide by. `target` may then be
/// partially written.
pub fn find_input_to_upper_triangular_into<M, V, T>(
    a: &M,
    b: &V,
    target: &mut T,
    tolerances: &Tolerances<M::F>,
) -> Result<()>
where
    M: Matrix + ?Sized,
    V: Vector<F = M::F> + ?Sized,
    T: VectorMut<F = M::F> + ?Sized,
{
    let (ins, outs) = a.shape();
    if outs < ins {
        return Err(LinearAlgebraError::Underdetermined { ins, outs });
    }
    check_dimension("find_input_to_upper_triangular", outs, b.dimension())?;
    check_dimension("find_input_to_upper_triangular_into", ins, target.dimension())?;
    tolerances.validate()?;
    check_upper_triangular(a, tolerances.zero)?;
    debug!("Back substitution on a matrix with {} inputs and {} outputs", ins, outs);

    for output in (0..ins).rev() {
        let dot = (output + 1..ins)
            .map(|input| -> Result<M::F> { Ok(target.get(input)? * a.get(input, output)?) })
            .sum::<Result<M::F>>()?;

        let pivot = a.get(output, output)?;
        if pivot.is_nan() || pivot.abs() < tolerances.singular {
            warn!("Can't divide by diagonal entry {} with value {}", output, pivot);
            return Err(LinearAlgebraError::Singular { index: output });
        }

        let value = (b.get(output)? - dot) / pivot;
        trace!("Coefficient {} is {}", output, value);
        target.set(output, value)?;
    }

    Ok(())
}
