//! Dense matrix type and the scalar multiplication kernels.
//!
//! The kernels work on raw row-major slices so the threaded path can hand
//! them disjoint row ranges. [`Matrix`] wraps one contiguous buffer and
//! keeps the shape invariant: `data.len() == rows * cols`, and a matrix
//! with no rows has no columns.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod transpose;

use crate::error::{MatfileError, Result};

/// Rectangular row-major matrix of `f64`.
///
/// There is no way to mutate elements after construction; products and
/// transposes always build a new matrix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build from a flat row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        let cols = if rows == 0 { 0 } else { cols };
        Self { rows, cols, data }
    }

    /// Build from nested rows, rejecting ragged input.
    ///
    /// Line numbers in the returned [`MatfileError::Shape`] are 1-based row
    /// indices.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for row in rows {
            let row = row.as_ref();
            count += 1;
            match cols {
                None => cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(MatfileError::Shape {
                        line: count,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
        }

        Ok(Self::from_vec(count, cols.unwrap_or(0), data))
    }

    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self::from_vec(rows, cols, vec![value; rows * cols])
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_vec(n, n, data)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns; zero whenever there are no rows.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major backing slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate rows as slices. Yields `rows()` items, empty when `cols() == 0`.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.data.len()];
        transpose::transpose(&self.data, &mut data, self.rows, self.cols);
        Self::from_vec(self.cols, self.rows, data)
    }
}
