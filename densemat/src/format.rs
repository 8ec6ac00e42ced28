/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt::{self, Display, Write};

use crate::matrix::Matrix;

/// Layout options for [`write_rows`].
///
/// The default writes every value followed by a single space and ends each row with a
/// newline, i.e. a `2 x 2` matrix of ones renders as `"1 1 \n1 1 \n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    separator: String,
    row_terminator: String,
    trailing_separator: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            row_terminator: "\n".to_string(),
            trailing_separator: true,
        }
    }
}

impl FormatOptions {
    /// Set the text written after (or between) values on a row.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the text written at the end of every row.
    pub fn with_row_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.row_terminator = terminator.into();
        self
    }

    /// Choose whether the last value on a row is also followed by the separator.
    pub fn with_trailing_separator(mut self, trailing: bool) -> Self {
        self.trailing_separator = trailing;
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn row_terminator(&self) -> &str {
        &self.row_terminator
    }

    pub fn trailing_separator(&self) -> bool {
        self.trailing_separator
    }
}

/// Write `items` into `sink`, wrapping after every `width` values.
///
/// Every row, including a final partial one, is ended with the row terminator. Nothing is
/// written for an empty sequence or a `width` of zero.
pub fn write_rows<W, I>(
    sink: &mut W,
    items: I,
    width: usize,
    options: &FormatOptions,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    if width == 0 {
        return Ok(());
    }

    let mut column = 0;
    for item in items {
        if column == width {
            sink.write_str(&options.row_terminator)?;
            column = 0;
        }
        if column != 0 && !options.trailing_separator {
            sink.write_str(&options.separator)?;
        }
        write!(sink, "{item}")?;
        if options.trailing_separator {
            sink.write_str(&options.separator)?;
        }
        column += 1;
    }

    if column != 0 {
        sink.write_str(&options.row_terminator)?;
    }
    Ok(())
}

/// A [`Display`] adaptor returned by [`Matrix::display_with`].
#[derive(Debug)]
pub struct DisplayWith<'a, T> {
    matrix: &'a Matrix<T>,
    options: &'a FormatOptions,
}

impl<T: Display> Display for DisplayWith<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.matrix, self.matrix.width(), self.options)
    }
}

impl<T> Matrix<T> {
    /// Return an object that renders this matrix with the given layout.
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> DisplayWith<'a, T> {
        DisplayWith {
            matrix: self,
            options,
        }
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self, self.width(), &FormatOptions::default())
    }
}
