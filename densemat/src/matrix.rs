/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::ops::{Index, IndexMut};

use crate::{dims::Dimensions, error::MatrixError};

/// A generator for initializing the entries in a matrix via [`Matrix::new`].
pub trait Generator<T> {
    fn generate(&mut self) -> T;
}

impl<T> Generator<T> for T
where
    T: Clone,
{
    fn generate(&mut self) -> T {
        self.clone()
    }
}

/// A matrix initializer that invokes the provided lambda to initialize each element.
pub struct Init<F>(pub F);

impl<T, F> Generator<T> for Init<F>
where
    F: FnMut() -> T,
{
    fn generate(&mut self) -> T {
        (self.0)()
    }
}

////////////
// Matrix //
////////////

/// An owning, dense, 2-dimensional container laid out in row-major order.
///
/// Cell `(row, col)` lives at linear offset `row * width() + col` of a single contiguous
/// backing store whose length is always `size()`. Cloning deep-copies the store, and
/// assigning one matrix to another replaces the shape and the store together.
///
/// Every access through [`Matrix::get`], [`Matrix::get_mut`] and the cursors returned
/// by [`Matrix::begin`] is bounds-checked and reports misuse as a [`MatrixError`].
/// The `Index` sugar panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    dims: Dimensions,
    data: Box<[T]>,
}

/// A matrix of `i32`.
pub type IntMatrix = Matrix<i32>;

impl<T> Matrix<T> {
    /// Construct a new matrix with the given shape, initialized with the contents of the
    /// generator.
    ///
    /// Elements are initialized in memory order. If the backing store cannot be
    /// allocated, `MatrixError::Allocation` is returned and nothing is leaked.
    pub fn new<U>(dims: Dimensions, mut generator: U) -> Result<Self, MatrixError>
    where
        U: Generator<T>,
    {
        let mut data = reserve(dims.size())?;
        data.extend((0..dims.size()).map(|_| generator.generate()));
        tracing::trace!(%dims, "constructed matrix");
        Ok(Self::from_parts(dims, data))
    }

    /// Construct a matrix with every cell set to `value`.
    pub fn filled(dims: Dimensions, value: T) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        Self::new(dims, value)
    }

    /// Construct a matrix with every cell set to `T::default()`.
    pub fn with_default(dims: Dimensions) -> Result<Self, MatrixError>
    where
        T: Default,
    {
        Self::new(dims, Init(T::default))
    }

    /// Take ownership of `data` as the row-major contents of a matrix with shape `dims`.
    ///
    /// Fails with `MatrixError::LengthMismatch` if `data.len() != dims.size()`.
    pub fn try_from_vec(dims: Dimensions, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != dims.size() {
            tracing::debug!(%dims, len = data.len(), "rejecting matrix buffer");
            return Err(MatrixError::LengthMismatch {
                len: data.len(),
                dims,
            });
        }
        Ok(Self::from_parts(dims, data))
    }

    /// Construct a `dim x dim` matrix of default-valued cells with `value` on the main
    /// diagonal.
    pub fn diagonal(dim: isize, value: T) -> Result<Self, MatrixError>
    where
        T: Default + Clone,
    {
        let dims = Dimensions::square(dim)?;
        let mut matrix = Self::with_default(dims)?;
        let stride = dims.cols() + 1;
        matrix
            .data
            .iter_mut()
            .step_by(stride)
            .for_each(|cell| *cell = value.clone());
        Ok(matrix)
    }

    /// Construct the `dim x dim` identity matrix, using `T::from(true)` as the unit.
    pub fn identity(dim: isize) -> Result<Self, MatrixError>
    where
        T: Default + Clone + From<bool>,
    {
        Self::diagonal(dim, T::from(true))
    }

    pub(crate) fn from_parts(dims: Dimensions, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), dims.size());
        Self {
            dims,
            data: data.into_boxed_slice(),
        }
    }

    /// Return the shape of the matrix.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Return the number of rows in the matrix.
    pub fn height(&self) -> usize {
        self.dims.rows()
    }

    /// Return the number of columns in the matrix.
    pub fn width(&self) -> usize {
        self.dims.cols()
    }

    /// Return the number of cells in the matrix.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Return a reference to cell `(row, col)`.
    ///
    /// Fails with `MatrixError::AccessIllegalElement` if either index is negative or not
    /// less than the respective dimension.
    pub fn get(&self, row: isize, col: isize) -> Result<&T, MatrixError> {
        match self.dims.offset(row, col) {
            Some(offset) => Ok(&self.data[offset]),
            None => Err(self.access_error(row, col)),
        }
    }

    /// Return a mutable reference to cell `(row, col)`.
    ///
    /// Fails under the same conditions as [`Matrix::get`].
    pub fn get_mut(&mut self, row: isize, col: isize) -> Result<&mut T, MatrixError> {
        match self.dims.offset(row, col) {
            Some(offset) => Ok(&mut self.data[offset]),
            None => Err(self.access_error(row, col)),
        }
    }

    /// Overwrite cell `(row, col)` with `value`.
    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    fn access_error(&self, row: isize, col: isize) -> MatrixError {
        tracing::debug!(row, col, dims = %self.dims, "rejecting matrix access");
        MatrixError::AccessIllegalElement {
            row,
            col,
            dims: self.dims,
        }
    }

    /// Return row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.height()`.
    pub fn row(&self, row: usize) -> &[T] {
        match self.get_row(row) {
            Some(slice) => slice,
            None => panic!(
                "tried to access row {row} of a matrix with {} rows",
                self.height()
            ),
        }
    }

    /// Return row `row` if `row < self.height()`. Otherwise, return `None`.
    pub fn get_row(&self, row: usize) -> Option<&[T]> {
        let ncols = self.width();
        let start = row.checked_mul(ncols)?;
        self.data.get(start..start.checked_add(ncols)?)
    }

    /// Return row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.height()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let nrows = self.height();
        assert!(
            row < nrows,
            "tried to access row {row} of a matrix with {nrows} rows"
        );
        let ncols = self.width();
        let start = row * ncols;
        &mut self.data[start..start + ncols]
    }

    /// Return an iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.data.chunks_exact(self.width())
    }

    /// Return a mutable iterator over all rows in the matrix.
    pub fn row_iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [T]> {
        let ncols = self.width();
        self.data.chunks_exact_mut(ncols)
    }

    /// Return the underlying data as a slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return the underlying data as a mutable slice in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning the backing store.
    ///
    /// This loses the information about the number of rows and columns.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Return a new matrix with rows and columns swapped, so that
    /// `result(j, i) == self(i, j)`.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let (nrows, ncols) = (self.height(), self.width());
        let data: Vec<T> = (0..ncols)
            .flat_map(|col| (0..nrows).map(move |row| (row, col)))
            .map(|(row, col)| self.data[row * ncols + col].clone())
            .collect();
        tracing::trace!(dims = %self.dims, "transposed matrix");
        Self::from_parts(self.dims.transposed(), data)
    }

    /// Return a new matrix of the same shape where each cell is `f(source_cell)`.
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.map(f)
    }

    /// Return a new matrix of the same shape where each cell is `f(source_cell)`,
    /// allowing the element type to change.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_parts(self.dims, self.data.iter().map(f).collect())
    }
}

fn reserve<T>(size: usize) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    if let Err(err) = data.try_reserve_exact(size) {
        tracing::debug!(size, "failed to allocate matrix backing store");
        return Err(err.into());
    }
    Ok(data)
}

/// Return a reference to the item at entry `(row, col)` in the matrix.
///
/// # Panics
///
/// Panics if `row >= self.height()` or `col >= self.width()`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let offset = checked_offset(self.dims, row, col);
        &self.data[offset]
    }
}

/// Return a mutable reference to the item at entry `(row, col)` in the matrix.
///
/// # Panics
///
/// Panics if `row >= self.height()` or `col >= self.width()`.
impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = checked_offset(self.dims, row, col);
        &mut self.data[offset]
    }
}

fn checked_offset(dims: Dimensions, row: usize, col: usize) -> usize {
    assert!(
        row < dims.rows(),
        "row {row} is out of bounds (max: {})",
        dims.rows()
    );
    assert!(
        col < dims.cols(),
        "col {col} is out of bounds (max: {})",
        dims.cols()
    );
    row * dims.cols() + col
}

///////////
// Tests //
///////////
