//! # QR decomposition
//!
//! Reduces a matrix with at least as many outputs as inputs to upper triangular form with one
//! Householder reflection per input, while accumulating the product of those reflections in an
//! orthogonal matrix.
//!
//! The reduction works in place on two running matrices and two scratch buffers of the same
//! shapes. Step `i` only touches the trailing block that is not yet final: inputs `i..ins` and
//! outputs `i..outs` of `R` and inputs `i..outs` of `Q`. Columns are processed from left to right.
use log::{debug, trace};

use crate::algorithm::householder::householder_into;
use crate::config::Tolerances;
use crate::data::linear_algebra::matrix::{DenseMatrix, Dual, Matrix, MatrixMut, Slice};
use crate::data::linear_algebra::matrix::ops::{
    apply_to_matrix_into,
    compose,
    compose_into,
    copy,
    copy_into,
    identity,
    is_finite,
    is_negligible,
};
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::{BasisVector, ColumnVector};
use crate::error::{LinearAlgebraError, Result};

/// Factorization of a matrix `A` into an orthogonal `Q` and an upper triangular `R` such that
/// `compose(R, Q)`, the matrix product `Q·R`, reconstructs `A`.
///
/// Shapes follow `A`: when `A` has shape `(ins, outs)`, `Q` has shape `(outs, outs)` and `R` has
/// shape `(ins, outs)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<F> {
    q: DenseMatrix<F>,
    r: DenseMatrix<F>,
    tolerances: Tolerances<F>,
}

impl<F: Scalar> QrDecomposition<F> {
    /// Decompose `a` using the default tolerances.
    ///
    /// # Errors
    ///
    /// `Underdetermined` if `a` has fewer outputs than inputs, `NonFinite` if `a` contains NaN or
    /// an infinity.
    pub fn new<M: Matrix<F = F> + ?Sized>(a: &M) -> Result<Self> {
        Self::with_tolerances(a, Tolerances::default())
    }

    /// Decompose `a`.
    ///
    /// # Arguments
    ///
    /// * `a`: Matrix with shape `(ins, outs)` where `outs >= ins`. Any view works.
    /// * `tolerances`: The `zero` threshold decides which columns are already reduced and need no
    /// reflection. The `singular` threshold is kept for solving with this decomposition later.
    ///
    /// # Errors
    ///
    /// `Underdetermined` if `a` has fewer outputs than inputs, `InvalidTolerance` if the
    /// tolerances don't validate, `NonFinite` if `a` contains NaN or an infinity.
    pub fn with_tolerances<M: Matrix<F = F> + ?Sized>(
        a: &M,
        tolerances: Tolerances<F>,
    ) -> Result<Self> {
        let (ins, outs) = a.shape();
        if outs < ins {
            return Err(LinearAlgebraError::Underdetermined { ins, outs });
        }
        tolerances.validate()?;
        if !is_finite(a)? {
            return Err(LinearAlgebraError::NonFinite { operation: "decompose_qr" });
        }
        debug!("Decomposing a matrix with {} inputs and {} outputs", ins, outs);

        let mut r = copy(a)?;
        let mut q = identity(outs);

        let mut r_work = DenseMatrix::zeros(ins, outs);
        let mut q_work = DenseMatrix::zeros(outs, outs);
        let mut reflection = DenseMatrix::zeros(outs, outs);

        let mut skipped = 0;
        for i in 0..ins {
            if is_negligible(&Slice::new(&r, i..i + 1, i + 1..outs)?, tolerances.zero)? {
                trace!("Column {} is already reduced", i);
                skipped += 1;
                continue;
            }
            trace!("Reflecting column {}", i);

            // Reflection of the trailing block, acting on outputs i..outs
            householder_into(
                &ColumnVector::new(Slice::new(&r, i..i + 1, i..outs)?)?,
                &BasisVector::new(outs - i, 0)?,
                &mut Slice::new(&mut reflection, i..outs, i..outs)?,
            )?;
            let h = Slice::new(&reflection, i..outs, i..outs)?;

            apply_to_matrix_into(
                &h,
                &Slice::new(&r, i..ins, i..outs)?,
                &mut Slice::new(&mut r_work, i..ins, i..outs)?,
            )?;
            copy_into(
                &Slice::new(&r_work, i..ins, i..outs)?,
                &mut Slice::new(&mut r, i..ins, i..outs)?,
            )?;
            for output in i + 1..outs {
                r.set(i, output, F::zero())?;
            }

            // Q ← Q·Hᵗ, only the inputs i..outs of Q change
            compose_into(
                &Dual::new(&h),
                &Slice::new(&q, i..outs, 0..outs)?,
                &mut Slice::new(&mut q_work, i..outs, 0..outs)?,
            )?;
            copy_into(
                &Slice::new(&q_work, i..outs, 0..outs)?,
                &mut Slice::new(&mut q, i..outs, 0..outs)?,
            )?;
        }
        debug!("Decomposition done, {} of {} columns needed no reflection", skipped, ins);

        Ok(Self { q, r, tolerances })
    }

    /// The orthogonal factor, with shape `(outs, outs)`.
    pub fn q(&self) -> &DenseMatrix<F> {
        &self.q
    }

    /// The upper triangular factor, with shape `(ins, outs)`.
    pub fn r(&self) -> &DenseMatrix<F> {
        &self.r
    }

    /// Tolerances this decomposition was computed with.
    pub fn tolerances(&self) -> &Tolerances<F> {
        &self.tolerances
    }

    /// Take `Q` and `R` out.
    pub fn into_parts(self) -> (DenseMatrix<F>, DenseMatrix<F>) {
        (self.q, self.r)
    }

    /// Compute `compose(R, Q)`, which approximates the decomposed matrix.
    pub fn reconstruct(&self) -> Result<DenseMatrix<F>> {
        compose(&self.r, &self.q)
    }
}

/// Decompose `a` into `(Q, R)` using the default tolerances.
///
/// See `QrDecomposition::with_tolerances`.
pub fn decompose_qr<M: Matrix + ?Sized>(a: &M) -> Result<(DenseMatrix<M::F>, DenseMatrix<M::F>)> {
    decompose_qr_with(a, &Tolerances::default())
}

/// Decompose `a` into `(Q, R)`.
///
/// # Return value
///
/// An orthogonal `Q` of shape `(outs, outs)` and an upper triangular `R` of the shape of `a`, such
/// that `compose(R, Q)` is `a` up to rounding.
pub fn decompose_qr_with<M: Matrix + ?Sized>(
    a: &M,
    tolerances: &Tolerances<M::F>,
) -> Result<(DenseMatrix<M::F>, DenseMatrix<M::F>)> {
    QrDecomposition::with_tolerances(a, *tolerances).map(QrDecomposition::into_parts)
}
