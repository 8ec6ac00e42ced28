/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Elementwise arithmetic.
//!
//! Matrix-matrix operators return `Result<Matrix<T>, MatrixError>` because the operands
//! may disagree in shape. Operators with a scalar operand cannot fail.

use std::ops::{Add, AddAssign, Neg, Sub};

use crate::{error::MatrixError, matrix::Matrix};

impl<T> Matrix<T> {
    fn check_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.dims() == other.dims() {
            Ok(())
        } else {
            tracing::debug!(left = %self.dims(), right = %other.dims(), "dimension mismatch");
            Err(MatrixError::DimensionMismatch {
                left: self.dims(),
                right: other.dims(),
            })
        }
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.check_same_shape(other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self::from_parts(self.dims(), data))
    }

    /// Return the elementwise sum of `self` and `other`.
    ///
    /// Fails with `MatrixError::DimensionMismatch`, carrying both shapes, if the operands
    /// differ in shape.
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Clone + Add<Output = T>,
    {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Return `self + (-other)`.
    ///
    /// Fails under the same conditions as [`Matrix::try_add`].
    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Clone + Add<Output = T> + Neg<Output = T>,
    {
        self.zip_with(other, |a, b| a.clone() + (-b.clone()))
    }

    /// Return a new matrix with `value` added to every cell.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        T: Clone + Add<Output = T>,
    {
        self.map(|x| x.clone() + value.clone())
    }

    /// Return a new matrix with `value` added on the left of every cell.
    pub fn scalar_add(value: &T, matrix: &Self) -> Self
    where
        T: Clone + Add<Output = T>,
    {
        matrix.map(|x| value.clone() + x.clone())
    }

    /// Add `value` to every cell in place and return the receiver.
    ///
    /// The receiver is only replaced once every cell has been computed.
    pub fn add_scalar_assign(&mut self, value: T) -> &mut Self
    where
        T: Clone + Add<Output = T>,
    {
        *self = self.add_scalar(&value);
        self
    }
}

impl<T> Add<&Matrix<T>> for &Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T> Add for Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: Matrix<T>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<T> Sub<&Matrix<T>> for &Matrix<T>
where
    T: Clone + Add<Output = T> + Neg<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T> Sub for Matrix<T>
where
    T: Clone + Add<Output = T> + Neg<Output = T>,
{
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: Matrix<T>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<T> Neg for &Matrix<T>
where
    T: Clone + Neg<Output = T>,
{
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x.clone())
    }
}

impl<T> Neg for Matrix<T>
where
    T: Clone + Neg<Output = T>,
{
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T> AddAssign<T> for Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar_assign(rhs);
    }
}

impl<T> Add<T> for &Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Matrix<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(&rhs)
    }
}

impl<T> Add<T> for Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Matrix<T>;

    fn add(mut self, rhs: T) -> Self::Output {
        self.add_scalar_assign(rhs);
        self
    }
}

// A generic `T + Matrix<T>` is forbidden by the orphan rule, so the left-scalar form is
// implemented per primitive.
macro_rules! impl_scalar_add {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: &Matrix<$t>) -> Self::Output {
                    Matrix::scalar_add(&self, rhs)
                }
            }

            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: Matrix<$t>) -> Self::Output {
                    Matrix::scalar_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_scalar_add!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
