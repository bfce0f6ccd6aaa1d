//! Matrix storage and the scalar reference kernel.
//!
//! [`Matrix`] owns contiguous row-major storage and carries its own shape,
//! checked once at construction. [`MatrixRef`] is the borrowed equivalent
//! over a caller's flat slice. Both, and the jagged
//! [`RowBorrow`](crate::marshal::RowBorrow), implement [`RowAccess`], which is
//! all the kernels need: whole rows handed out as contiguous slices.

pub mod naive_abt;
pub mod transpose;

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Row-at-a-time read access to a dense matrix.
///
/// `row(i)` must return exactly `ncols()` values for every `i < nrows()`.
/// The SIMD kernels re-slice each row to `ncols()` before touching raw
/// pointers, so a violating implementation panics instead of reading out
/// of bounds.
pub trait RowAccess {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn row(&self, i: usize) -> &[f64];
}

/// Owned, row-major `rows × cols` matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wraps row-major `data`, which must hold exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Copies a jagged array of rows into contiguous storage.
    ///
    /// The column count is taken from the first row; every other row must
    /// match it. An empty input yields a `0 × 0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Borrowed view over the same storage.
    pub fn view(&self) -> MatrixRef<'_> {
        MatrixRef {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns `selfᵗ` as a new matrix.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        transpose::transpose(&self.data, &mut out.data, self.rows, self.cols);
        out
    }

    /// Splits the matrix into independently allocated rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks_exact(self.cols).map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.row(i)[j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.row_mut(i)[j]
    }
}

impl RowAccess for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn row(&self, i: usize) -> &[f64] {
        Matrix::row(self, i)
    }
}

/// Borrowed row-major view over a flat slice.
#[derive(Debug, Clone, Copy)]
pub struct MatrixRef<'a> {
    pub(crate) data: &'a [f64],
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<'a> MatrixRef<'a> {
    /// `data` must hold exactly `rows * cols` values.
    pub fn new(data: &'a [f64], rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }
}

impl RowAccess for MatrixRef<'_> {
    fn nrows(&self) -> usize {
        self.rows
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}
