/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Positional cursors and iterators over the cells of a [`Matrix`].
//!
//! A [`Cursor`] is a `(matrix, index)` pair over the interval `[0, size())`. The position
//! `size()` is the one-past-the-end position returned by [`Matrix::end`]. Dereferencing a
//! cursor re-checks the index on every call and fails with
//! [`MatrixError::IllegalPosition`] rather than clamping to a valid cell.
//!
//! Because a cursor borrows its matrix, any structural replacement of the matrix (for
//! example, assigning a new value to it) cannot happen while a cursor is alive.

use std::{fmt, iter::FusedIterator, ptr};

use crate::{error::MatrixError, matrix::Matrix};

////////////
// Cursor //
////////////

/// A read-only position within a matrix.
pub struct Cursor<'a, T> {
    matrix: &'a Matrix<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    fn new(matrix: &'a Matrix<T>, index: usize) -> Self {
        Self { matrix, index }
    }

    /// Return the linear (row-major) index of this position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return whether this cursor sits at or past the end of its matrix.
    pub fn is_end(&self) -> bool {
        self.index >= self.matrix.size()
    }

    /// Return the element at this position.
    ///
    /// Fails with `MatrixError::IllegalPosition` at or past the end position.
    pub fn get(&self) -> Result<&'a T, MatrixError> {
        position(self.matrix.as_slice(), self.index)
    }

    /// Move the cursor forward by one position.
    pub fn advance(&mut self) -> &mut Self {
        self.index = self.index.saturating_add(1);
        self
    }

    /// Return a copy of this cursor moved forward by `n` positions.
    pub fn advanced_by(self, n: usize) -> Self {
        Self {
            matrix: self.matrix,
            index: self.index.saturating_add(n),
        }
    }
}

// Manually implemented so we don't require `T: Clone`.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Two cursors are equal when they refer to the same matrix instance at the same index.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.matrix, other.matrix) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("matrix", &ptr::from_ref(self.matrix))
            .field("index", &self.index)
            .field("size", &self.matrix.size())
            .finish()
    }
}

///////////////
// CursorMut //
///////////////

/// An exclusive position within a matrix that permits mutation of the current element.
pub struct CursorMut<'a, T> {
    matrix: &'a mut Matrix<T>,
    index: usize,
}

impl<T> CursorMut<'_, T> {
    /// Return the linear (row-major) index of this position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return whether this cursor sits at or past the end of its matrix.
    pub fn is_end(&self) -> bool {
        self.index >= self.matrix.size()
    }

    /// Return the element at this position.
    pub fn get(&self) -> Result<&T, MatrixError> {
        position(self.matrix.as_slice(), self.index)
    }

    /// Return the element at this position mutably.
    pub fn get_mut(&mut self) -> Result<&mut T, MatrixError> {
        let size = self.matrix.size();
        let index = self.index;
        self.matrix
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| illegal_position(index, size))
    }

    /// Move the cursor forward by one position.
    pub fn advance(&mut self) -> &mut Self {
        self.index = self.index.saturating_add(1);
        self
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("size", &self.matrix.size())
            .finish()
    }
}

fn position<T>(data: &[T], index: usize) -> Result<&T, MatrixError> {
    data.get(index)
        .ok_or_else(|| illegal_position(index, data.len()))
}

fn illegal_position(index: usize, size: usize) -> MatrixError {
    tracing::debug!(index, size, "rejecting cursor dereference");
    MatrixError::IllegalPosition { index, size }
}

impl<T> Matrix<T> {
    /// Return a cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Return the one-past-the-end cursor.
    ///
    /// This position must never be dereferenced: [`Cursor::get`] fails on it.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.size())
    }

    /// Return a mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            matrix: self,
            index: 0,
        }
    }

    /// Return an iterator over all elements in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.begin(),
            end: self.end(),
        }
    }

    /// Return a mutable iterator over all elements in row-major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut_slice().iter_mut())
    }
}

///////////////
// Iterators //
///////////////

/// Row-major iterator returned by [`Matrix::iter`].
///
/// Each call to `Matrix::iter` yields a fresh, independent traversal.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    end: Cursor<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self.cursor.get().ok()?;
        self.cursor.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.index().saturating_sub(self.cursor.index());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Row-major mutable iterator returned by [`Matrix::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T>(std::slice::IterMut<'a, T>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
