//! SIMD microkernels for the inner loop of the transposed product.
//!
//! The kernel computes a short run of dot products P[i, j..j+4] between one
//! row of A and four rows of B using AVX2 + FMA. It's called by the blocked
//! driver in [`crate::blocked`], which handles panel sizing and leftovers.
//!
//! Available kernels:
//! - `kernel_1x4`: 1×4 tile, AVX2 (4 accumulator registers)

pub mod kernel_1x4;
