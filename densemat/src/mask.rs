/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use crate::matrix::Matrix;

/// Conversion of a cell to a boolean, as used by [`all`] and [`any`].
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_nonzero {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_truthy_nonzero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_nonzero!(0.0 => f32, f64);

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for &T
where
    T: Truthy + ?Sized,
{
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T> Matrix<T> {
    /// Return a mask of the same shape holding `pred(cell)` for every cell.
    pub fn mask<F>(&self, pred: F) -> Matrix<bool>
    where
        F: FnMut(&T) -> bool,
    {
        self.map(pred)
    }

    /// Elementwise `cell < value`.
    pub fn mask_lt(&self, value: &T) -> Matrix<bool>
    where
        T: PartialOrd,
    {
        self.mask(|x| x < value)
    }

    /// Elementwise `cell <= value`.
    pub fn mask_le(&self, value: &T) -> Matrix<bool>
    where
        T: PartialOrd,
    {
        self.mask(|x| x <= value)
    }

    /// Elementwise `cell > value`.
    pub fn mask_gt(&self, value: &T) -> Matrix<bool>
    where
        T: PartialOrd,
    {
        self.mask(|x| x > value)
    }

    /// Elementwise `cell >= value`.
    pub fn mask_ge(&self, value: &T) -> Matrix<bool>
    where
        T: PartialOrd,
    {
        self.mask(|x| x >= value)
    }

    /// Elementwise `cell == value`.
    pub fn mask_eq(&self, value: &T) -> Matrix<bool>
    where
        T: PartialEq,
    {
        self.mask(|x| x == value)
    }

    /// Elementwise `cell != value`.
    pub fn mask_ne(&self, value: &T) -> Matrix<bool>
    where
        T: PartialEq,
    {
        self.mask(|x| x != value)
    }

    /// Return `true` if every cell is truthy. Stops at the first falsy cell.
    pub fn all(&self) -> bool
    where
        T: Truthy,
    {
        self.iter().all(Truthy::truthy)
    }

    /// Return `true` if at least one cell is truthy. Stops at the first truthy cell.
    pub fn any(&self) -> bool
    where
        T: Truthy,
    {
        self.iter().any(Truthy::truthy)
    }
}

/// Return `true` if every cell of `matrix` is truthy.
pub fn all<T: Truthy>(matrix: &Matrix<T>) -> bool {
    matrix.all()
}

/// Return `true` if at least one cell of `matrix` is truthy.
pub fn any<T: Truthy>(matrix: &Matrix<T>) -> bool {
    matrix.any()
}
