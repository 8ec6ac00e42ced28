/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! A dense, owning, row-major 2-D container.
//!
//! [`Matrix`] owns a single contiguous backing store and a [`Dimensions`] descriptor.
//! It provides bounds-checked access, positional cursors, elementwise arithmetic,
//! relational masks, transposition and functional transforms. All misuse (non-positive
//! shapes, out-of-range indices, mismatched operands) is reported as a [`MatrixError`]
//! whose [`ErrorKind`] can be inspected programmatically.
//!
//! ```
//! use densemat::{all, Dimensions, IntMatrix, Matrix};
//!
//! let dims = Dimensions::new(2, 2)?;
//! let mut m = IntMatrix::filled(dims, 0)?;
//! m.set(0, 0, 1)?;
//! m.set(1, 1, 1)?;
//! assert_eq!(m, Matrix::diagonal(2, 1)?);
//!
//! let shifted = &m + 1;
//! assert!(all(&shifted.mask_ge(&1)));
//! # Ok::<(), densemat::MatrixError>(())
//! ```

pub mod dims;
pub use dims::Dimensions;

pub mod error;
pub use error::{ErrorKind, MatrixError};

pub mod matrix;
pub use matrix::{Generator, Init, IntMatrix, Matrix};

pub mod cursor;
pub use cursor::{Cursor, CursorMut, Iter, IterMut};

pub mod mask;
pub use mask::{all, any, Truthy};

mod ops;

pub mod format;
pub use format::{write_rows, FormatOptions};
