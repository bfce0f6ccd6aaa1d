//! Row-wise transposed matrix product over jagged `f64` rows, plus log-gamma.
//!
//! The multiply here is **not** the textbook `A × B`. It computes
//! `P = A × Bᵗ`: `P[i][j] = Σ_k A[i][k] * B[j][k]`. Both operands must have
//! the same number of columns, and the result is `rows(A) × rows(B)`.
//! Reading B by rows means the inner loop streams both operands
//! sequentially, which is what makes it fast on row-of-rows storage.
//! If you want `A × B`, pass `Bᵗ`, or use [`multiply_standard`].
//!
//! ## Usage
//!
//! ```
//! use jagmath::matrix_multiply;
//!
//! let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
//!
//! let p = matrix_multiply(&a, 2, 2, &b, 2, 2).unwrap();
//! assert_eq!(p, vec![vec![17.0, 23.0], vec![39.0, 53.0]]);
//! ```
//!
//! Flat row-major slices go through [`multiply_transposed`]:
//!
//! ```
//! use jagmath::multiply_transposed;
//!
//! let a = vec![1.0f64; 64 * 32];
//! let b = vec![1.0f64; 48 * 32];
//! let mut p = vec![0.0f64; 64 * 48];
//!
//! multiply_transposed(&a, &b, &mut p, 64, 48, 32);
//! assert!(p.iter().all(|&v| v == 32.0));
//! ```
//!
//! ## What's inside
//!
//! - Jagged import/export with a borrow guard ([`marshal`])
//! - Scalar reference kernel and a 1×4 AVX2 kernel with L2 panel blocking
//! - `ln|Γ(x)|` via the C `lgamma` routine

pub mod error;
pub mod gamma;
pub mod marshal;
pub mod matrix;

#[cfg(target_arch = "x86_64")]
pub mod blocked;
#[cfg(target_arch = "x86_64")]
pub mod kernels;

pub use error::{Error, Result};
pub use gamma::{log_gamma, log_gamma_signed};
pub use marshal::{JaggedSource, RowBorrow, export};
pub use matrix::naive_abt::matmul_naive_abt;
pub use matrix::{Matrix, MatrixRef, RowAccess};

use tracing::{debug, instrument};

/// Which transposed-product kernel to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelChoice {
    /// SIMD when the CPU supports it, scalar otherwise.
    #[default]
    Auto,
    /// Always the scalar reference loop.
    Scalar,
    /// The AVX2/FMA kernel; falls back to scalar if unsupported.
    Simd,
}

impl KernelChoice {
    /// Whether this choice runs the SIMD kernel on the current CPU.
    pub fn uses_simd(self) -> bool {
        match self {
            KernelChoice::Scalar => false,
            KernelChoice::Auto => simd_available(),
            KernelChoice::Simd => {
                let available = simd_available();
                if !available {
                    debug!("SIMD kernel requested without avx2/fma, using scalar");
                }
                available
            }
        }
    }
}

/// True when the CPU reports both AVX2 and FMA.
#[cfg(target_arch = "x86_64")]
pub fn simd_available() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

/// True when the CPU reports both AVX2 and FMA.
#[cfg(not(target_arch = "x86_64"))]
pub fn simd_available() -> bool {
    false
}

/// Liveness probe. Always `0`, no side effects.
pub fn zero() -> i32 {
    0
}

/// Transposed product of two jagged matrices: `P = A × Bᵗ`
///
/// `a` is `r1 × c1`, `b` is `r2 × c2`, and the result is `r1 × r2` with
/// `P[i][j] = Σ_k a[i][k] * b[j][k]`. Note this pairs *rows* of B with rows
/// of A; it is not the standard matrix product.
///
/// Picks the fastest available kernel for your CPU (AVX2 > scalar).
///
/// # Errors
///
/// - [`Error::ColumnMismatch`] if `c1 != c2`
/// - [`Error::RowCount`] / [`Error::RaggedRow`] if a source disagrees with
///   its declared shape
pub fn matrix_multiply<A, B>(
    a: &A,
    r1: usize,
    c1: usize,
    b: &B,
    r2: usize,
    c2: usize,
) -> Result<Vec<Vec<f64>>>
where
    A: JaggedSource + ?Sized,
    B: JaggedSource + ?Sized,
{
    matrix_multiply_with(a, r1, c1, b, r2, c2, KernelChoice::Auto)
}

/// Same as [`matrix_multiply`] with an explicit kernel.
#[instrument(level = "debug", skip(a, b))]
pub fn matrix_multiply_with<A, B>(
    a: &A,
    r1: usize,
    c1: usize,
    b: &B,
    r2: usize,
    c2: usize,
    kernel: KernelChoice,
) -> Result<Vec<Vec<f64>>>
where
    A: JaggedSource + ?Sized,
    B: JaggedSource + ?Sized,
{
    if c1 != c2 {
        return Err(Error::ColumnMismatch {
            left: c1,
            right: c2,
        });
    }

    let left = RowBorrow::import(a, r1, c1)?;
    let right = RowBorrow::import(b, r2, c2)?;

    let mut product = Matrix::zeros(r1, r2);
    run_kernel(&left, &right, product.as_mut_slice(), kernel);

    // Operands are done before the product leaves
    left.release();
    right.release();

    Ok(product.into_rows())
}

/// Transposed product on flat row-major slices: P = A × Bᵗ
///
/// A is r1×c, B is r2×c, P is r1×r2 and is overwritten.
///
/// # Panics
///
/// Panics if the slice sizes don't match r1, r2, c.
pub fn multiply_transposed(a: &[f64], b: &[f64], p: &mut [f64], r1: usize, r2: usize, c: usize) {
    assert_eq!(a.len(), r1 * c, "A: expected {}x{}={} elements", r1, c, r1 * c);
    assert_eq!(b.len(), r2 * c, "B: expected {}x{}={} elements", r2, c, r2 * c);
    assert_eq!(p.len(), r1 * r2, "P: expected {}x{}={} elements", r1, r2, r1 * r2);

    let a = MatrixRef {
        data: a,
        rows: r1,
        cols: c,
    };
    let b = MatrixRef {
        data: b,
        rows: r2,
        cols: c,
    };
    run_kernel(&a, &b, p, KernelChoice::Auto);
}

/// Textbook matrix product `A × B`.
///
/// Transposes B once, then runs the row-wise kernel against `Bᵗ`.
///
/// # Errors
///
/// [`Error::InnerDimension`] if `a.cols() != b.rows()`.
pub fn multiply_standard(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(Error::InnerDimension {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let bt = b.transpose();
    let mut product = Matrix::zeros(a.rows(), b.cols());
    run_kernel(a, &bt, product.as_mut_slice(), KernelChoice::Auto);
    Ok(product)
}

fn run_kernel<A, B>(a: &A, b: &B, p: &mut [f64], kernel: KernelChoice)
where
    A: RowAccess + ?Sized,
    B: RowAccess + ?Sized,
{
    #[cfg(target_arch = "x86_64")]
    {
        if kernel.uses_simd() {
            debug!(r1 = a.nrows(), r2 = b.nrows(), c = a.ncols(), "avx2 kernel");
            // SAFETY: uses_simd only returns true after detecting avx2 and fma
            unsafe { blocked::gemm_abt::matmul_blocked_abt(a, b, p) };
            return;
        }
    }

    debug!(r1 = a.nrows(), r2 = b.nrows(), c = a.ncols(), "scalar kernel");
    matrix::naive_abt::matmul_naive_abt(a, b, p);
}
