//! # Vector types
//!
//! A vector is an element of a vector space, stored as the coefficients of a linear combination
//! of assumed basis elements.
//!
//! As with matrices, reading (`Vector`) and writing (`VectorMut`) are separate capabilities. The
//! dense vector owns its values; the column and row vectors are views that expose a single column
//! or row of a matrix, and the basis vector is computed on the fly and can't be written to.
pub use dense::Dense as DenseVector;
pub use view::{BasisVector, ColumnVector, RowVector};

use crate::data::linear_algebra::traits::Scalar;
use crate::error::{LinearAlgebraError, Position, Result};

pub mod ops;
mod dense;
mod view;

/// Defines basic ways to read a vector, regardless of back-end.
pub trait Vector {
    /// Scalar type of the coefficients.
    type F: Scalar;

    /// Size of any basis in the space, which is the number of coefficients.
    fn dimension(&self) -> usize;
    /// Retrieve the coefficient of basis element `index`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `index >= dimension()`.
    fn get(&self, index: usize) -> Result<Self::F>;
}

/// Write access to a vector.
pub trait VectorMut: Vector {
    /// Set the coefficient of basis element `index`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `index >= dimension()`.
    fn set(&mut self, index: usize, value: Self::F) -> Result<()>;
}

impl<V: Vector + ?Sized> Vector for &V {
    type F = V::F;

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn get(&self, index: usize) -> Result<Self::F> {
        (**self).get(index)
    }
}

impl<V: Vector + ?Sized> Vector for &mut V {
    type F = V::F;

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn get(&self, index: usize) -> Result<Self::F> {
        (**self).get(index)
    }
}

impl<V: VectorMut + ?Sized> VectorMut for &mut V {
    fn set(&mut self, index: usize, value: Self::F) -> Result<()> {
        (**self).set(index, value)
    }
}

/// Check that `index` lies within a vector of dimension `dimension`.
pub fn check_component(dimension: usize, index: usize) -> Result<()> {
    if index < dimension {
        Ok(())
    } else {
        Err(LinearAlgebraError::OutOfBounds {
            index: Position::Component(index),
            extent: Position::Component(dimension),
        })
    }
}

/// Check that a vector has the dimension an operation expects.
pub fn check_dimension(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinearAlgebraError::DimensionMismatch { operation, expected, actual })
    }
}
