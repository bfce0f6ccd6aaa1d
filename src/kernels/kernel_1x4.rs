//! 1×4 AVX2 microkernel for the transposed product.

/// Computes four dot products: `[A_row · B0, A_row · B1, A_row · B2, A_row · B3]`
///
/// This is the inner kernel called by the blocked A × Bᵗ driver. One row of A
/// is streamed against four rows of B at once, keeping 4 AVX2 registers as
/// accumulators (one per B row). Each step loads 4 consecutive values from
/// every row, so all five streams are read sequentially.
///
/// The horizontal reduction sums lanes pairwise, so results can differ from
/// the scalar kernel in the last bits.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `a` and each of `b0..b3` point to at least `k` readable f64 values
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
#[inline]
pub unsafe fn kernel_1x4_avx2(
    a: *const f64,
    b0: *const f64,
    b1: *const f64,
    b2: *const f64,
    b3: *const f64,
    k: usize,
) -> [f64; 4] {
    use std::arch::x86_64::*;

    let mut c0 = _mm256_setzero_pd();
    let mut c1 = _mm256_setzero_pd();
    let mut c2 = _mm256_setzero_pd();
    let mut c3 = _mm256_setzero_pd();

    // Main loop: load 4 values of A once, FMA against the same span of each B row
    let k_main = (k / 4) * 4;
    let mut p = 0;
    while p < k_main {
        let a_vec = _mm256_loadu_pd(a.add(p));

        c0 = _mm256_fmadd_pd(a_vec, _mm256_loadu_pd(b0.add(p)), c0);
        c1 = _mm256_fmadd_pd(a_vec, _mm256_loadu_pd(b1.add(p)), c1);
        c2 = _mm256_fmadd_pd(a_vec, _mm256_loadu_pd(b2.add(p)), c2);
        c3 = _mm256_fmadd_pd(a_vec, _mm256_loadu_pd(b3.add(p)), c3);

        p += 4;
    }

    let mut out = [hsum(c0), hsum(c1), hsum(c2), hsum(c3)];

    // k tail that doesn't fill a register
    for p in k_main..k {
        let av = *a.add(p);
        out[0] += av * *b0.add(p);
        out[1] += av * *b1.add(p);
        out[2] += av * *b2.add(p);
        out[3] += av * *b3.add(p);
    }

    out
}

#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
#[inline]
unsafe fn hsum(v: std::arch::x86_64::__m256d) -> f64 {
    use std::arch::x86_64::*;

    let lo = _mm256_castpd256_pd128(v);
    let hi = _mm256_extractf128_pd(v, 1);
    let pair = _mm_add_pd(lo, hi);
    let swapped = _mm_unpackhi_pd(pair, pair);
    _mm_cvtsd_f64(_mm_add_sd(pair, swapped))
}
