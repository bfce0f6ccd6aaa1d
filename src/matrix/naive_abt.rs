use super::RowAccess;

/// Row-by-row transposed product: P = A × Bᵗ
///
/// This is the reference triple loop. Unlike the textbook i-j-k order it
/// walks B by *rows*, so the inner loop streams through `A[i]` and `B[j]`
/// sequentially (stride 1) on both operands. No transpose is materialised.
///
/// `P[i][j] = Σ_k A[i][k] * B[j][k]`, accumulated in a fresh `f64` starting
/// at zero and stored (P is overwritten, not accumulated into).
///
/// # Arguments
///
/// * `a` - Matrix A (r1 × c)
/// * `b` - Matrix B (r2 × c), its rows act as the columns of the right operand
/// * `p` - Matrix P (r1 × r2), row-major
///
/// # Panics
///
/// Panics if A and B differ in width or `p` is not `r1 * r2` long.
pub fn matmul_naive_abt<A, B>(a: &A, b: &B, p: &mut [f64])
where
    A: RowAccess + ?Sized,
    B: RowAccess + ?Sized,
{
    let (r1, r2) = (a.nrows(), b.nrows());
    assert_eq!(a.ncols(), b.ncols(), "A and B must have equal column counts");
    assert_eq!(p.len(), r1 * r2, "P: expected {}x{}={} elements", r1, r2, r1 * r2);

    for i in 0..r1 {
        let a_row = a.row(i);
        for j in 0..r2 {
            p[i * r2 + j] = dot(a_row, b.row(j));
        }
    }
}

/// Sequential dot product of two equal-length rows.
#[inline]
pub(crate) fn dot(x: &[f64], y: &[f64]) -> f64 {
    let mut s = 0.0;
    for (&xv, &yv) in x.iter().zip(y) {
        s += xv * yv;
    }
    s
}
