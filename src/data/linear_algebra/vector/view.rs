//! # Vectors that don't own their values
use std::marker::PhantomData;

use crate::data::linear_algebra::matrix::{Matrix, MatrixMut};
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::{check_component, Vector, VectorMut};
use crate::error::{LinearAlgebraError, Result};

/// A matrix with a single input, seen as a vector over its outputs.
#[derive(Debug, Clone)]
pub struct ColumnVector<M> {
    parent: M,
}

impl<M: Matrix> ColumnVector<M> {
    /// Drop the input axis of `parent`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `parent` doesn't have exactly one input.
    pub fn new(parent: M) -> Result<Self> {
        let (ins, outs) = parent.shape();
        if ins != 1 {
            return Err(LinearAlgebraError::ShapeMismatch {
                operation: "column vector",
                left: (ins, outs),
                right: (1, outs),
            });
        }

        Ok(Self { parent })
    }
}

impl<M: Matrix> Vector for ColumnVector<M> {
    type F = M::F;

    fn dimension(&self) -> usize {
        self.parent.outs()
    }

    fn get(&self, index: usize) -> Result<Self::F> {
        check_component(self.dimension(), index)?;

        self.parent.get(0, index)
    }
}

impl<M: MatrixMut> VectorMut for ColumnVector<M> {
    fn set(&mut self, index: usize, value: Self::F) -> Result<()> {
        check_component(self.dimension(), index)?;

        self.parent.set(0, index, value)
    }
}

/// A matrix with a single output, seen as a vector over its inputs.
#[derive(Debug, Clone)]
pub struct RowVector<M> {
    parent: M,
}

impl<M: Matrix> RowVector<M> {
    /// Drop the output axis of `parent`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `parent` doesn't have exactly one output.
    pub fn new(parent: M) -> Result<Self> {
        let (ins, outs) = parent.shape();
        if outs != 1 {
            return Err(LinearAlgebraError::ShapeMismatch {
                operation: "row vector",
                left: (ins, outs),
                right: (ins, 1),
            });
        }

        Ok(Self { parent })
    }
}

impl<M: Matrix> Vector for RowVector<M> {
    type F = M::F;

    fn dimension(&self) -> usize {
        self.parent.ins()
    }

    fn get(&self, index: usize) -> Result<Self::F> {
        check_component(self.dimension(), index)?;

        self.parent.get(index, 0)
    }
}

impl<M: MatrixMut> VectorMut for RowVector<M> {
    fn set(&mut self, index: usize, value: Self::F) -> Result<()> {
        check_component(self.dimension(), index)?;

        self.parent.set(index, 0, value)
    }
}

/// Unit vector with a one at `index` and zero's elsewhere. Read only.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BasisVector<F> {
    dimension: usize,
    index: usize,
    phantom: PhantomData<F>,
}

impl<F: Scalar> BasisVector<F> {
    /// Basis element `index` of a space with dimension `dimension`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `index >= dimension`.
    pub fn new(dimension: usize, index: usize) -> Result<Self> {
        check_component(dimension, index)?;

        Ok(Self { dimension, index, phantom: PhantomData })
    }
}

impl<F: Scalar> Vector for BasisVector<F> {
    type F = F;

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn get(&self, index: usize) -> Result<F> {
        check_component(self.dimension, index)?;

        Ok(if index == self.index { F::one() } else { F::zero() })
    }
}
