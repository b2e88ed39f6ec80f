//! # Matrix implementations
//!
//! A matrix is a linear map under an assumed basis. Entries are addressed by `(input, output)`:
//! the scalar applied to input basis element `input` when computing output basis element
//! `output`, which is the entry in column `input` and row `output`.
//!
//! The `Matrix` trait defines the read operations available for all matrix types defined in this
//! module, `MatrixMut` adds writing. There are two kinds of implementors:
//!
//! * `DenseMatrix` owns its values. All operators in `ops` that produce a new matrix return one.
//! * Views (`Slice`, `Dual`) own nothing and redirect every access to a parent matrix under an
//! index transform. They are generic over the handle to the parent: a view over `&M` can only
//! read, a view over `&mut M` writes through to the parent's storage.
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::data::linear_algebra::traits::Scalar;
use crate::error::{LinearAlgebraError, Position, Result, Shape};

pub use view::{Dual, Slice};

pub mod ops;
mod view;

/// Read access to a linear map, regardless of back-end.
pub trait Matrix {
    /// Scalar type of the entries.
    type F: Scalar;

    /// Number of inputs and outputs of the map: the number of columns and rows.
    fn shape(&self) -> Shape;
    /// Get the scalar applied to `input` as part of the linear combination that determines
    /// `output`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the coordinate lies outside of `shape()`.
    fn get(&self, input: usize, output: usize) -> Result<Self::F>;

    /// Number of inputs (columns).
    fn ins(&self) -> usize {
        self.shape().0
    }
    /// Number of outputs (rows).
    fn outs(&self) -> usize {
        self.shape().1
    }
}

/// Write access to a linear map.
pub trait MatrixMut: Matrix {
    /// Change the scalar applied to `input` as part of the linear combination that determines
    /// `output`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the coordinate lies outside of `shape()`.
    fn set(&mut self, input: usize, output: usize, value: Self::F) -> Result<()>;
}

impl<M: Matrix + ?Sized> Matrix for &M {
    type F = M::F;

    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn get(&self, input: usize, output: usize) -> Result<Self::F> {
        (**self).get(input, output)
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    type F = M::F;

    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn get(&self, input: usize, output: usize) -> Result<Self::F> {
        (**self).get(input, output)
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    fn set(&mut self, input: usize, output: usize, value: Self::F) -> Result<()> {
        (**self).set(input, output, value)
    }
}

/// Check that `(input, output)` lies within a matrix of the given `shape`.
pub fn check_entry(shape: Shape, input: usize, output: usize) -> Result<()> {
    let (ins, outs) = shape;
    if input < ins && output < outs {
        Ok(())
    } else {
        Err(LinearAlgebraError::OutOfBounds {
            index: Position::Entry { input, output },
            extent: Position::Entry { input: ins, output: outs },
        })
    }
}

/// Check that two matrices have exactly the same shape.
pub fn check_same_shape(operation: &'static str, left: Shape, right: Shape) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(LinearAlgebraError::ShapeMismatch { operation, left, right })
    }
}

/// Uses a single `Vec` as underlying data structure, indexed as `output * ins + input`. Shape is
/// fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<F>,
    ins: usize,
    outs: usize,
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a dense matrix of zero's with `ins` inputs and `outs` outputs.
    pub fn zeros(ins: usize, outs: usize) -> Self {
        Self { data: vec![F::zero(); ins * outs], ins, outs }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i * len + i] = F::one();
        }

        matrix
    }

    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `rows`: One `Vec` per output, each containing the scalars for all inputs. This reads like
    /// the matrix is usually written down.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if not all rows have the same length.
    pub fn from_data(rows: Vec<Vec<F>>) -> Result<Self> {
        let outs = rows.len();
        let ins = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(ins * outs);
        for row in rows {
            if row.len() != ins {
                return Err(LinearAlgebraError::DimensionMismatch {
                    operation: "from_data",
                    expected: ins,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self { data, ins, outs })
    }

    /// Get the data of this matrix, in storage order.
    pub fn data(&self) -> &[F] {
        &self.data
    }

    fn offset(&self, input: usize, output: usize) -> usize {
        output * self.ins + input
    }
}

impl<F: Scalar> Matrix for DenseMatrix<F> {
    type F = F;

    fn shape(&self) -> Shape {
        (self.ins, self.outs)
    }

    fn get(&self, input: usize, output: usize) -> Result<F> {
        check_entry(self.shape(), input, output)?;

        Ok(self.data[self.offset(input, output)])
    }
}

impl<F: Scalar> MatrixMut for DenseMatrix<F> {
    fn set(&mut self, input: usize, output: usize, value: F) -> Result<()> {
        check_entry(self.shape(), input, output)?;

        let offset = self.offset(input, output);
        self.data[offset] = value;
        Ok(())
    }
}

impl<F: Scalar> fmt::Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.data.chunks(self.ins.max(1)) {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, "\t{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<F: Scalar + AbsDiffEq<Epsilon = F>> AbsDiffEq for DenseMatrix<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<F: Scalar + RelativeEq<Epsilon = F>> RelativeEq for DenseMatrix<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.shape() == other.shape()
            && self.data.iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
