//! Boundary between caller-owned jagged rows and the kernel.
//!
//! Import borrows each row of a [`JaggedSource`] into a [`RowBorrow`],
//! export copies any [`RowAccess`] matrix into a fresh `Vec<Vec<f64>>`, and
//! release ends the borrow. Nothing returned by [`export`] aliases kernel
//! buffers or caller storage.

mod borrow;
mod source;

pub use borrow::RowBorrow;
pub use source::JaggedSource;

use crate::matrix::RowAccess;

/// Copies every row of `m` into a newly allocated jagged array.
pub fn export<M: RowAccess + ?Sized>(m: &M) -> Vec<Vec<f64>> {
    (0..m.nrows()).map(|i| m.row(i).to_vec()).collect()
}
