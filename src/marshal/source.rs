//! Jagged row sources accepted at the kernel boundary.

use std::borrow::Cow;

/// A caller-owned sequence of independently stored rows.
///
/// `row_view` hands out a direct view of a row when its storage already is
/// a contiguous `[f64]`, and a transient widened copy otherwise. Rows are not
/// required to share a length; that is checked on import.
pub trait JaggedSource {
    fn row_count(&self) -> usize;
    fn row_view(&self, i: usize) -> Cow<'_, [f64]>;
}

impl JaggedSource for [Vec<f64>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self[i])
    }
}

impl JaggedSource for [&[f64]] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        Cow::Borrowed(self[i])
    }
}

impl<const N: usize> JaggedSource for [[f64; N]] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self[i][..])
    }
}

impl JaggedSource for [Vec<f32>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        Cow::Owned(widen(&self[i]))
    }
}

impl JaggedSource for [&[f32]] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        Cow::Owned(widen(self[i]))
    }
}

impl<R> JaggedSource for Vec<R>
where
    [R]: JaggedSource,
{
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        self.as_slice().row_view(i)
    }
}

impl<R, const M: usize> JaggedSource for [R; M]
where
    [R]: JaggedSource,
{
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn row_view(&self, i: usize) -> Cow<'_, [f64]> {
        self.as_slice().row_view(i)
    }
}

fn widen(row: &[f32]) -> Vec<f64> {
    row.iter().map(|&v| f64::from(v)).collect()
}
