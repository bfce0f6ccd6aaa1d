//! Panel-blocked A × Bᵗ using the 1×4 AVX2 kernel.

use crate::kernels::kernel_1x4::kernel_1x4_avx2;
use crate::matrix::RowAccess;
use crate::matrix::naive_abt::dot;

/// Bytes of B rows kept hot while sweeping over every row of A.
const L2_PANEL_BYTES: usize = 256 * 1024;

/// Cache-blocked transposed product using the 1×4 AVX2 kernel.
///
/// B's rows are consumed in panels sized to stay in L2. For each panel,
/// every row of A is streamed against it four B rows at a time, so the
/// panel is reused r1 times before being evicted. Rows of B left over
/// after the last group of 4 use the scalar dot product.
///
/// No packing step is needed: the transposed formula already reads both
/// operands row-wise. Rows may live in separate allocations (jagged input).
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2 and FMA.
///
/// # Panics
///
/// Panics if A and B differ in width, `p` is not `r1 * r2` long, or a
/// [`RowAccess`] implementation hands out a row shorter than `ncols()`.
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn matmul_blocked_abt<A, B>(a: &A, b: &B, p: &mut [f64])
where
    A: RowAccess + ?Sized,
    B: RowAccess + ?Sized,
{
    let (r1, r2, k) = (a.nrows(), b.nrows(), a.ncols());
    assert_eq!(b.ncols(), k, "A and B must have equal column counts");
    assert_eq!(p.len(), r1 * r2, "P: expected {}x{}={} elements", r1, r2, r1 * r2);

    let nc = panel_rows(k);

    for jj in (0..r2).step_by(nc) {
        let j_end = (jj + nc).min(r2);
        let j_main = jj + ((j_end - jj) / 4) * 4;

        for i in 0..r1 {
            // Re-slicing bounds every raw read below to k values
            let a_row = &a.row(i)[..k];
            let out = &mut p[i * r2..(i + 1) * r2];

            for j in (jj..j_main).step_by(4) {
                let b0 = &b.row(j)[..k];
                let b1 = &b.row(j + 1)[..k];
                let b2 = &b.row(j + 2)[..k];
                let b3 = &b.row(j + 3)[..k];

                let s = kernel_1x4_avx2(
                    a_row.as_ptr(),
                    b0.as_ptr(),
                    b1.as_ptr(),
                    b2.as_ptr(),
                    b3.as_ptr(),
                    k,
                );
                out[j..j + 4].copy_from_slice(&s);
            }

            // Leftover B rows that don't fill a group of 4
            for j in j_main..j_end {
                out[j] = dot(a_row, &b.row(j)[..k]);
            }
        }
    }
}

/// Number of B rows per panel: a multiple of 4, never less than 4.
fn panel_rows(k: usize) -> usize {
    let fit = L2_PANEL_BYTES / (8 * k.max(1));
    ((fit / 4) * 4).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_multiple_of_four() {
        for k in [0, 1, 3, 64, 1000, 10_000, 1_000_000] {
            let nc = panel_rows(k);
            assert!(nc >= 4 && nc % 4 == 0, "k = {}: nc = {}", k, nc);
        }
        assert_eq!(panel_rows(1024), 32);
    }
}
