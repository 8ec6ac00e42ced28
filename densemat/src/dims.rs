/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt;

use crate::error::MatrixError;

/// The `(rows, cols)` shape of a [`Matrix`](crate::Matrix).
///
/// A `Dimensions` can only be obtained through [`Dimensions::new`] (or
/// [`Dimensions::square`]), which guarantees that both components are strictly positive
/// and that `rows * cols` is representable as a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Construct a new shape with `rows` rows and `cols` columns.
    ///
    /// Returns `MatrixError::IllegalInitialization` if either argument is not strictly
    /// positive or if the number of cells overflows `usize`.
    pub fn new(rows: isize, cols: isize) -> Result<Self, MatrixError> {
        let illegal = || {
            tracing::debug!(rows, cols, "rejecting matrix dimensions");
            MatrixError::IllegalInitialization { rows, cols }
        };

        if rows <= 0 || cols <= 0 {
            return Err(illegal());
        }

        // Both are positive, so the conversions are lossless.
        let (urows, ucols) = (rows as usize, cols as usize);
        if urows.checked_mul(ucols).is_none() {
            return Err(illegal());
        }

        Ok(Self {
            rows: urows,
            cols: ucols,
        })
    }

    /// Construct a `dim x dim` shape.
    pub fn square(dim: isize) -> Result<Self, MatrixError> {
        Self::new(dim, dim)
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the total number of cells, `rows * cols`.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Return the shape with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Return whether `(row, col)` addresses a cell within this shape.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.offset(row, col).is_some()
    }

    /// Return the row-major linear offset of `(row, col)`, or `None` if it lies outside
    /// `[0, rows) x [0, cols)`.
    pub fn offset(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn positive_dimensions_are_accepted() {
        let dims = Dimensions::new(2, 3).unwrap();
        assert_eq!(dims.rows(), 2);
        assert_eq!(dims.cols(), 3);
        assert_eq!(dims.size(), 6);

        let square = Dimensions::square(4).unwrap();
        assert_eq!(square.rows(), 4);
        assert_eq!(square.cols(), 4);
        assert_eq!(square.size(), 16);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (rows, cols) in [(0, 1), (1, 0), (0, 0), (-1, -1), (-1, 3), (3, -7)] {
            let err = Dimensions::new(rows, cols).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalInitialization, "({rows}, {cols})");
            assert!(
                matches!(err, MatrixError::IllegalInitialization { rows: r, cols: c } if r == rows && c == cols)
            );
        }
        assert!(Dimensions::square(0).is_err());
        assert!(Dimensions::square(-5).is_err());
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let err = Dimensions::new(isize::MAX, isize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalInitialization);
    }

    #[test]
    fn offsets_are_row_major() {
        let dims = Dimensions::new(3, 4).unwrap();
        assert_eq!(dims.offset(0, 0), Some(0));
        assert_eq!(dims.offset(0, 3), Some(3));
        assert_eq!(dims.offset(1, 0), Some(4));
        assert_eq!(dims.offset(2, 3), Some(11));

        assert_eq!(dims.offset(3, 0), None);
        assert_eq!(dims.offset(0, 4), None);
        assert_eq!(dims.offset(-1, 0), None);
        assert_eq!(dims.offset(0, -1), None);

        assert!(dims.contains(2, 2));
        assert!(!dims.contains(2, 4));
    }

    #[test]
    fn transposed_swaps_components() {
        let dims = Dimensions::new(2, 5).unwrap();
        let t = dims.transposed();
        assert_eq!(t.rows(), 5);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.transposed(), dims);
    }

    #[test]
    fn display() {
        let dims = Dimensions::new(2, 7).unwrap();
        assert_eq!(dims.to_string(), "(2,7)");
    }
}
