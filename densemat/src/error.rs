/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::collections::TryReserveError;

use thiserror::Error;

use crate::dims::Dimensions;

/// Errors yielded by fallible [`Matrix`](crate::Matrix) operations.
///
/// Use [`MatrixError::kind`] to discriminate the cause without matching on every variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("illegal initialization values: {rows} rows and {cols} columns")]
    IllegalInitialization { rows: isize, cols: isize },

    #[error("tried to access element ({row},{col}) of a matrix with dimensions {dims}")]
    AccessIllegalElement {
        row: isize,
        col: isize,
        dims: Dimensions,
    },

    #[error("tried to dereference position {index} of a matrix with {size} elements")]
    IllegalPosition { index: usize, size: usize },

    #[error("dimension mismatch: {left} {right}")]
    DimensionMismatch { left: Dimensions, right: Dimensions },

    #[error(
        "tried to construct a matrix with dimensions {dims} over a buffer of length {len}"
    )]
    LengthMismatch { len: usize, dims: Dimensions },

    #[error(transparent)]
    Allocation(#[from] TryReserveError),
}

/// The coarse category of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor was handed a non-positive shape or a buffer of the wrong length.
    IllegalInitialization,
    /// An index or cursor position fell outside the matrix.
    AccessIllegalElement,
    /// Two operands of an elementwise operation had different shapes.
    DimensionMismatch,
    /// The backing store could not be allocated.
    Allocation,
}

impl MatrixError {
    /// Return the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalInitialization { .. } | Self::LengthMismatch { .. } => {
                ErrorKind::IllegalInitialization
            }
            Self::AccessIllegalElement { .. } | Self::IllegalPosition { .. } => {
                ErrorKind::AccessIllegalElement
            }
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::Allocation(_) => ErrorKind::Allocation,
        }
    }
}
