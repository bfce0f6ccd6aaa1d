//! Cache-blocked transposed product.
//!
//! Splits B's rows into panels that fit in L2, then streams every row of A
//! against each panel through the SIMD microkernel.
//!
//! Available implementations:
//! - `gemm_abt`: Uses the 1×4 AVX2 kernel

pub mod gemm_abt;
