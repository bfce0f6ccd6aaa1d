//! Property-based tests for the transposed product.
//!
//! - A × Bᵗ = (B × Aᵗ)ᵗ
//! - Scalar and SIMD kernels agree within tolerance
//! - Output shape is rows(A) × rows(B)

use jagmath::{KernelChoice, matrix_multiply_with};
use proptest::prelude::*;

/// Two jagged operands sharing a column count
fn operands() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<Vec<f64>>, usize)> {
    (0usize..12, 0usize..12, 0usize..40).prop_flat_map(|(r1, r2, c)| {
        let row = proptest::collection::vec(-100.0f64..100.0, c);
        (
            proptest::collection::vec(row.clone(), r1),
            proptest::collection::vec(row, r2),
            Just(c),
        )
    })
}

fn close(x: f64, y: f64) -> bool {
    (x - y).abs() <= 1e-9 * x.abs().max(y.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_shape_is_rows_by_rows((a, b, c) in operands()) {
        let p = matrix_multiply_with(&a, a.len(), c, &b, b.len(), c, KernelChoice::Auto).unwrap();

        prop_assert_eq!(p.len(), a.len());
        for row in &p {
            prop_assert_eq!(row.len(), b.len());
        }
    }

    #[test]
    fn prop_swapping_operands_transposes((a, b, c) in operands()) {
        let (r1, r2) = (a.len(), b.len());
        let ab = matrix_multiply_with(&a, r1, c, &b, r2, c, KernelChoice::Scalar).unwrap();
        let ba = matrix_multiply_with(&b, r2, c, &a, r1, c, KernelChoice::Scalar).unwrap();

        // Same products summed in the same order, so this is exact
        for i in 0..r1 {
            for j in 0..r2 {
                prop_assert_eq!(ab[i][j], ba[j][i]);
            }
        }
    }

    #[test]
    fn prop_simd_matches_scalar((a, b, c) in operands()) {
        let (r1, r2) = (a.len(), b.len());
        let scalar = matrix_multiply_with(&a, r1, c, &b, r2, c, KernelChoice::Scalar).unwrap();
        let simd = matrix_multiply_with(&a, r1, c, &b, r2, c, KernelChoice::Simd).unwrap();

        for i in 0..r1 {
            for j in 0..r2 {
                // Reordered summation of up to 40 terms of magnitude 1e4
                let tol_scale: f64 = a[i].iter().zip(&b[j]).map(|(x, y)| (x * y).abs()).sum();
                prop_assert!(
                    (scalar[i][j] - simd[i][j]).abs() <= 1e-12 * tol_scale.max(1.0),
                    "({}, {}): scalar {} vs simd {}", i, j, scalar[i][j], simd[i][j]
                );
            }
        }
    }

    #[test]
    fn prop_single_precision_input_widens_exactly(
        rows in proptest::collection::vec(proptest::collection::vec(-1.0e3f32..1.0e3, 3), 1..6)
    ) {
        let wide: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().map(|&v| f64::from(v)).collect())
            .collect();
        let n = rows.len();

        let from_f32 = matrix_multiply_with(&rows, n, 3, &rows, n, 3, KernelChoice::Scalar).unwrap();
        let from_f64 = matrix_multiply_with(&wide, n, 3, &wide, n, 3, KernelChoice::Scalar).unwrap();

        for (x, y) in from_f32.iter().flatten().zip(from_f64.iter().flatten()) {
            prop_assert!(close(*x, *y));
        }
    }
}
