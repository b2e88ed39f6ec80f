//! # Views on matrices
//!
//! Views don't own any values. Reading and writing is redirected to the parent matrix, so the
//! borrow held by the view guarantees that the parent outlives it.
use std::ops::Range;

use crate::data::linear_algebra::matrix::{check_entry, Matrix, MatrixMut};
use crate::error::{LinearAlgebraError, Position, Result, Shape};

/// Rectangular part of a parent matrix.
///
/// Coordinate `(input, output)` of the slice is coordinate `(input + in_lo, output + out_lo)` of
/// the parent. Bounds are checked against the shape of the slice, not of the parent.
#[derive(Debug, Clone)]
pub struct Slice<M> {
    parent: M,
    in_lo: usize,
    out_lo: usize,
    ins: usize,
    outs: usize,
}

impl<M: Matrix> Slice<M> {
    /// Select the `inputs` columns and `outputs` rows of `parent`.
    ///
    /// Empty ranges are allowed and give a matrix without entries.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if a range is decreasing or reaches beyond the parent's shape.
    pub fn new(parent: M, inputs: Range<usize>, outputs: Range<usize>) -> Result<Self> {
        let (ins, outs) = parent.shape();
        if inputs.start > inputs.end || inputs.end > ins
            || outputs.start > outputs.end || outputs.end > outs {
            return Err(LinearAlgebraError::OutOfBounds {
                index: Position::Entry { input: inputs.end, output: outputs.end },
                extent: Position::Entry { input: ins, output: outs },
            });
        }

        Ok(Self {
            parent,
            in_lo: inputs.start,
            out_lo: outputs.start,
            ins: inputs.len(),
            outs: outputs.len(),
        })
    }

    /// Release the handle to the parent.
    pub fn into_inner(self) -> M {
        self.parent
    }
}

impl<M: Matrix> Matrix for Slice<M> {
    type F = M::F;

    fn shape(&self) -> Shape {
        (self.ins, self.outs)
    }

    fn get(&self, input: usize, output: usize) -> Result<Self::F> {
        check_entry(self.shape(), input, output)?;

        self.parent.get(input + self.in_lo, output + self.out_lo)
    }
}

impl<M: MatrixMut> MatrixMut for Slice<M> {
    fn set(&mut self, input: usize, output: usize, value: Self::F) -> Result<()> {
        check_entry(self.shape(), input, output)?;

        self.parent.set(input + self.in_lo, output + self.out_lo, value)
    }
}

/// Transpose of a parent matrix.
///
/// The dual swaps the axes: `(input, output)` on the dual is `(output, input)` on the parent.
#[derive(Debug, Clone)]
pub struct Dual<M> {
    parent: M,
}

impl<M: Matrix> Dual<M> {
    #[allow(missing_docs)]
    pub fn new(parent: M) -> Self {
        Self { parent }
    }

    /// Release the handle to the parent.
    pub fn into_inner(self) -> M {
        self.parent
    }
}

impl<M: Matrix> Matrix for Dual<M> {
    type F = M::F;

    fn shape(&self) -> Shape {
        let (ins, outs) = self.parent.shape();
        (outs, ins)
    }

    fn get(&self, input: usize, output: usize) -> Result<Self::F> {
        check_entry(self.shape(), input, output)?;

        self.parent.get(output, input)
    }
}

impl<M: MatrixMut> MatrixMut for Dual<M> {
    fn set(&mut self, input: usize, output: usize, value: Self::F) -> Result<()> {
        check_entry(self.shape(), input, output)?;

        self.parent.set(output, input, value)
    }
}
