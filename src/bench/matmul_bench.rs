//! Criterion benchmarks for the transposed product and log-gamma.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jagmath::{KernelChoice, Matrix, log_gamma, matmul_naive_abt, matrix_multiply_with};

fn square(n: usize, modulus: usize) -> Matrix {
    let data = (0..n * n).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(n, n, data).expect("n * n values")
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("abt_kernel");

    for n in [64, 128, 256] {
        let a = square(n, 17);
        let b = square(n, 13);
        let mut p = vec![0.0; n * n];
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("scalar", n), &n, |bench, _| {
            bench.iter(|| matmul_naive_abt(black_box(&a), black_box(&b), &mut p))
        });

        #[cfg(target_arch = "x86_64")]
        {
            if jagmath::simd_available() {
                group.bench_with_input(BenchmarkId::new("avx2_blocked", n), &n, |bench, _| {
                    bench.iter(|| unsafe {
                        jagmath::blocked::gemm_abt::matmul_blocked_abt(
                            black_box(&a),
                            black_box(&b),
                            &mut p,
                        )
                    })
                });
            }
        }
    }

    group.finish();
}

fn bench_jagged(c: &mut Criterion) {
    let mut group = c.benchmark_group("jagged_round_trip");

    for n in [64, 256] {
        let a = square(n, 17).into_rows();
        let b = square(n, 13).into_rows();

        for (name, kernel) in [("scalar", KernelChoice::Scalar), ("auto", KernelChoice::Auto)] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |bench, &n| {
                bench.iter(|| matrix_multiply_with(black_box(&a), n, n, black_box(&b), n, n, kernel))
            });
        }
    }

    group.finish();
}

fn bench_log_gamma(c: &mut Criterion) {
    c.bench_function("log_gamma", |bench| {
        bench.iter(|| {
            let mut s = 0.0;
            for i in 1..1000 {
                s += log_gamma(black_box(i as f64 * 0.37));
            }
            s
        })
    });
}

criterion_group!(benches, bench_kernels, bench_jagged, bench_log_gamma);
criterion_main!(benches);
