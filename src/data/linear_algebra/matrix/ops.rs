//! # Elementary operators on matrices
//!
//! Operators without an `_into` suffix allocate a fresh `DenseMatrix` or `DenseVector` for their
//! result. The `_into` variants write into an output argument instead, which may be a view.
//!
//! Composition order follows the reading order of maps: `compose(a, b)` is "`a`, then `b`", which
//! is the matrix product `b·a`.
use itertools::iproduct;
use num_traits::{Float, One, Zero};

use crate::data::linear_algebra::matrix::{check_same_shape, DenseMatrix, Matrix, MatrixMut};
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::{check_dimension, DenseVector, Vector, VectorMut};
use crate::error::{LinearAlgebraError, Result};

/// Dense identity map on a space of dimension `size`.
pub fn identity<F: Scalar>(size: usize) -> DenseMatrix<F> {
    DenseMatrix::identity(size)
}

/// Overwrite `target` with the identity.
///
/// # Errors
///
/// `ShapeMismatch` if `target` isn't square.
pub fn identity_into<M: MatrixMut + ?Sized>(target: &mut M) -> Result<()> {
    let (ins, outs) = target.shape();
    check_same_shape("identity_into", (outs, outs), (ins, outs))?;

    for (output, input) in iproduct!(0..outs, 0..ins) {
        let value = if input == output { M::F::one() } else { M::F::zero() };
        target.set(input, output, value)?;
    }

    Ok(())
}

/// Dense copy of any matrix, including views.
pub fn copy<M: Matrix + ?Sized>(a: &M) -> Result<DenseMatrix<M::F>> {
    let (ins, outs) = a.shape();
    let mut result = DenseMatrix::zeros(ins, outs);
    copy_into(a, &mut result)?;

    Ok(result)
}

/// Copy all entries of `a` into `target`.
///
/// # Errors
///
/// `ShapeMismatch` if the shapes differ.
pub fn copy_into<A, T>(a: &A, target: &mut T) -> Result<()>
where
    A: Matrix + ?Sized,
    T: MatrixMut<F = A::F> + ?Sized,
{
    check_same_shape("copy_into", a.shape(), target.shape())?;

    let (ins, outs) = a.shape();
    for (output, input) in iproduct!(0..outs, 0..ins) {
        target.set(input, output, a.get(input, output)?)?;
    }

    Ok(())
}

/// The map "`a`, then `b`": the matrix product `b·a`.
///
/// # Errors
///
/// `ShapeMismatch` if `a` has a different number of outputs than `b` has inputs.
pub fn compose<A, B>(a: &A, b: &B) -> Result<DenseMatrix<A::F>>
where
    A: Matrix + ?Sized,
    B: Matrix<F = A::F> + ?Sized,
{
    let mut result = DenseMatrix::zeros(a.ins(), b.outs());
    compose_into(a, b, &mut result)?;

    Ok(result)
}

/// Write the map "`a`, then `b`" into `target`.
///
/// Entry `(i, o)` of the result is `Σ_k a(i, k)·b(k, o)`.
///
/// # Errors
///
/// `ShapeMismatch` if `outs(a) != ins(b)`, or if `target` doesn't have shape `(ins(a), outs(b))`.
pub fn compose_into<A, B, T>(a: &A, b: &B, target: &mut T) -> Result<()>
where
    A: Matrix + ?Sized,
    B: Matrix<F = A::F> + ?Sized,
    T: MatrixMut<F = A::F> + ?Sized,
{
    let (a_ins, a_outs) = a.shape();
    let (b_ins, b_outs) = b.shape();
    if a_outs != b_ins {
        return Err(LinearAlgebraError::ShapeMismatch {
            operation: "compose",
            left: a.shape(),
            right: b.shape(),
        });
    }
    check_same_shape("compose_into", (a_ins, b_outs), target.shape())?;

    for (output, input) in iproduct!(0..b_outs, 0..a_ins) {
        let value = (0..a_outs)
            .map(|k| -> Result<A::F> { Ok(a.get(input, k)? * b.get(k, output)?) })
            .sum::<Result<A::F>>()?;
        target.set(input, output, value)?;
    }

    Ok(())
}

/// Apply the map `a` to every column of `x`; the same as `compose(x, a)`.
pub fn apply_to_matrix<A, X>(a: &A, x: &X) -> Result<DenseMatrix<A::F>>
where
    A: Matrix + ?Sized,
    X: Matrix<F = A::F> + ?Sized,
{
    compose(x, a)
}

/// Write `a` applied to every column of `x` into `target`.
pub fn apply_to_matrix_into<A, X, T>(a: &A, x: &X, target: &mut T) -> Result<()>
where
    A: Matrix + ?Sized,
    X: Matrix<F = A::F> + ?Sized,
    T: MatrixMut<F = A::F> + ?Sized,
{
    compose_into(x, a, target)
}

/// Apply the map `a` to the vector `x`.
///
/// # Errors
///
/// `DimensionMismatch` if `x` doesn't have `ins(a)` coefficients.
pub fn apply_to_vector<A, V>(a: &A, x: &V) -> Result<DenseVector<A::F>>
where
    A: Matrix + ?Sized,
    V: Vector<F = A::F> + ?Sized,
{
    let mut result = DenseVector::zeros(a.outs());
    apply_to_vector_into(a, x, &mut result)?;

    Ok(result)
}

/// Write `a` applied to `x` into `target`: coefficient `o` is `Σ_i a(i, o)·x(i)`.
///
/// # Errors
///
/// `DimensionMismatch` if `x` doesn't have `ins(a)` or `target` doesn't have `outs(a)`
/// coefficients.
pub fn apply_to_vector_into<A, V, T>(a: &A, x: &V, target: &mut T) -> Result<()>
where
    A: Matrix + ?Sized,
    V: Vector<F = A::F> + ?Sized,
    T: VectorMut<F = A::F> + ?Sized,
{
    let (ins, outs) = a.shape();
    check_dimension("apply_to_vector", ins, x.dimension())?;
    check_dimension("apply_to_vector_into", outs, target.dimension())?;

    for output in 0..outs {
        let value = (0..ins)
            .map(|input| -> Result<A::F> { Ok(a.get(input, output)? * x.get(input)?) })
            .sum::<Result<A::F>>()?;
        target.set(output, value)?;
    }

    Ok(())
}

/// Whether every entry is exactly zero.
pub fn is_zero<M: Matrix + ?Sized>(a: &M) -> Result<bool> {
    is_negligible(a, M::F::zero())
}

/// Whether every entry is at most `tolerance` away from zero. NaN never is.
pub fn is_negligible<M: Matrix + ?Sized>(a: &M, tolerance: M::F) -> Result<bool> {
    let (ins, outs) = a.shape();
    for (output, input) in iproduct!(0..outs, 0..ins) {
        let value = a.get(input, output)?;
        if value.is_nan() || value.abs() > tolerance {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether no entry is NaN or infinite.
pub fn is_finite<M: Matrix + ?Sized>(a: &M) -> Result<bool> {
    let (ins, outs) = a.shape();
    for (output, input) in iproduct!(0..outs, 0..ins) {
        if !a.get(input, output)?.is_finite() {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::{DenseMatrix, Dual, Matrix, MatrixMut, Slice};
    use crate::data::linear_algebra::matrix::ops::*;
    use crate::data::linear_algebra::vector::{DenseVector, Vector};
    use crate::error::LinearAlgebraError;

    /// Two inputs, three outputs.
    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![2f64, 0f64],
            vec![2f64, 0f64],
            vec![0f64, 3f64],
        ]).unwrap()
    }

    #[test]
    fn identity_properties() {
        let a = identity::<f64>(3);

        assert_eq!(a.shape(), (3, 3));
        for output in 0..3 {
            for input in 0..3 {
                let expected = if input == output { 1f64 } else { 0f64 };
                assert_eq!(a.get(input, output), Ok(expected));
            }
        }
    }

    #[test]
    fn identity_into_view() {
        let mut a = DenseMatrix::from_data(vec![vec![5f64; 3]; 3]).unwrap();
        identity_into(&mut Slice::new(&mut a, 1..3, 1..3).unwrap()).unwrap();

        let expected = DenseMatrix::from_data(vec![
            vec![5f64, 5f64, 5f64],
            vec![5f64, 1f64, 0f64],
            vec![5f64, 0f64, 1f64],
        ]).unwrap();
        assert_eq!(a, expected);

        let mut not_square = DenseMatrix::<f64>::zeros(2, 3);
        assert!(identity_into(&mut not_square).is_err());
    }

    #[test]
    fn copy_and_copy_into() {
        let a = test_matrix();

        let b = copy(&a).unwrap();
        assert_eq!(b, a);

        let mut c = DenseMatrix::zeros(2, 3);
        copy_into(&a, &mut c).unwrap();
        assert_eq!(c, a);

        // Copying a view materializes it
        let d = copy(&Dual::new(&a)).unwrap();
        assert_eq!(d.shape(), (3, 2));
        assert_eq!(d.get(2, 1), Ok(3f64));

        let mut wrong = DenseMatrix::zeros(3, 2);
        assert_eq!(copy_into(&a, &mut wrong), Err(LinearAlgebraError::ShapeMismatch {
            operation: "copy_into",
            left: (2, 3),
            right: (3, 2),
        }));
    }

    #[test]
    fn copy_is_independent() {
        let a = test_matrix();
        let mut b = copy(&a).unwrap();
        b.set(0, 0, 100f64).unwrap();

        assert_eq!(a.get(0, 0), Ok(2f64));
    }

    #[test]
    fn compose_with_dual() {
        let a = test_matrix();

        let b = compose(&a, &Dual::new(&a)).unwrap();
        assert_eq!(b, DenseMatrix::from_data(vec![
            vec![8f64, 0f64],
            vec![0f64, 9f64],
        ]).unwrap());

        let c = compose(&Dual::new(&a), &a).unwrap();
        assert_eq!(c, DenseMatrix::from_data(vec![
            vec![4f64, 4f64, 0f64],
            vec![4f64, 4f64, 0f64],
            vec![0f64, 0f64, 9f64],
        ]).unwrap());
    }

    #[test]
    fn compose_into_checks_shapes() {
        let a = test_matrix();

        let mut b = DenseMatrix::zeros(2, 2);
        compose_into(&a, &Dual::new(&a), &mut b).unwrap();
        assert_eq!(b.get(0, 0), Ok(8f64));
        assert_eq!(b.get(1, 1), Ok(9f64));

        assert_eq!(compose(&a, &a), Err(LinearAlgebraError::ShapeMismatch {
            operation: "compose",
            left: (2, 3),
            right: (2, 3),
        }));

        let mut wrong = DenseMatrix::zeros(3, 3);
        assert!(compose_into(&a, &Dual::new(&a), &mut wrong).is_err());
    }

    #[test]
    fn apply() {
        let a = test_matrix();

        let b = apply_to_matrix(&Dual::new(&a), &a).unwrap();
        assert_eq!(b.shape(), (2, 2));
        assert_eq!(b.get(0, 0), Ok(8f64));
        assert_eq!(b.get(1, 1), Ok(9f64));

        let mut c = DenseMatrix::zeros(3, 3);
        apply_to_matrix_into(&a, &Dual::new(&a), &mut c).unwrap();
        assert_eq!(c.get(0, 0), Ok(4f64));
        assert_eq!(c.get(2, 2), Ok(9f64));
    }

    #[test]
    fn apply_to_vector_example() {
        let a = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![3f64, 4f64],
        ]).unwrap();
        let x = DenseVector::new(vec![1f64, 2f64]);

        let b = apply_to_vector(&a, &x).unwrap();
        assert_eq!(b.dimension(), 2);
        assert_abs_diff_eq!(b, DenseVector::new(vec![5f64, 11f64]));

        let wrong = DenseVector::new(vec![1f64, 2f64, 3f64]);
        assert_eq!(apply_to_vector(&a, &wrong), Err(LinearAlgebraError::DimensionMismatch {
            operation: "apply_to_vector",
            expected: 2,
            actual: 3,
        }));

        let mut target = DenseVector::zeros(3);
        assert!(apply_to_vector_into(&a, &x, &mut target).is_err());
    }

    #[test]
    fn zero_checks() {
        let mut a = DenseMatrix::<f64>::zeros(2, 3);
        assert_eq!(is_zero(&a), Ok(true));

        a.set(1, 2, 1e-12).unwrap();
        assert_eq!(is_zero(&a), Ok(false));
        assert_eq!(is_negligible(&a, 1e-9), Ok(true));
        assert_eq!(is_negligible(&a, 1e-13), Ok(false));

        // Views without entries are zero
        assert_eq!(is_zero(&Slice::new(&a, 0..2, 3..3).unwrap()), Ok(true));
    }

    #[test]
    fn nan_is_not_zero() {
        let mut a = DenseMatrix::<f64>::zeros(2, 2);
        a.set(0, 1, f64::NAN).unwrap();

        assert_eq!(is_zero(&a), Ok(false));
        assert_eq!(is_negligible(&a, 1e-9), Ok(false));
        assert_eq!(is_negligible(&a, f64::INFINITY), Ok(false));
        assert_eq!(is_finite(&a), Ok(false));

        a.set(0, 1, f64::NEG_INFINITY).unwrap();
        assert_eq!(is_finite(&a), Ok(false));
        a.set(0, 1, 1e300).unwrap();
        assert_eq!(is_finite(&a), Ok(true));
    }
}
