use std::borrow::Cow;

use tracing::trace;

use super::source::JaggedSource;
use crate::error::{Error, Result};
use crate::matrix::RowAccess;

/// Read-only borrow of a jagged source's rows for one kernel invocation.
///
/// Construction validates the declared shape and takes a view of every row.
/// The `'a` borrow keeps the source immutable and in place until the guard
/// is released, either explicitly through [`release`](Self::release) or by
/// going out of scope on an early return. Transient copies are dropped
/// without write-back.
#[derive(Debug)]
pub struct RowBorrow<'a> {
    rows: Vec<Cow<'a, [f64]>>,
    cols: usize,
    released: bool,
}

impl<'a> RowBorrow<'a> {
    /// Borrows `rows` rows of exactly `cols` values from `source`.
    ///
    /// Fails with [`Error::RowCount`] if `source` holds a different number of
    /// rows, or [`Error::RaggedRow`] on the first row whose length is not
    /// `cols`.
    pub fn import<S>(source: &'a S, rows: usize, cols: usize) -> Result<Self>
    where
        S: JaggedSource + ?Sized,
    {
        let actual = source.row_count();
        if actual != rows {
            return Err(Error::RowCount {
                declared: rows,
                actual,
            });
        }

        let mut views = Vec::with_capacity(rows);
        for i in 0..rows {
            let view = source.row_view(i);
            if view.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: view.len(),
                });
            }
            views.push(view);
        }

        let borrow = Self {
            rows: views,
            cols,
            released: false,
        };
        trace!(rows, cols, copied = borrow.copied_rows(), "imported jagged rows");
        Ok(borrow)
    }

    /// Whether row `i` is a transient copy rather than a direct view.
    pub fn is_copy(&self, i: usize) -> bool {
        matches!(self.rows[i], Cow::Owned(_))
    }

    /// Number of rows that had to be copied on import.
    pub fn copied_rows(&self) -> usize {
        self.rows.iter().filter(|r| matches!(r, Cow::Owned(_))).count()
    }

    /// Ends the borrow. The source is free for reuse afterwards.
    pub fn release(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.released {
            return;
        }
        trace!(
            rows = self.rows.len(),
            copied = self.copied_rows(),
            "released jagged rows"
        );
        self.rows.clear();
        self.released = true;
    }
}

impl Drop for RowBorrow<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

impl RowAccess for RowBorrow<'_> {
    fn nrows(&self) -> usize {
        self.rows.len()
    }

    fn ncols(&self) -> usize {
        self.cols
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }
}
