//! Benchmark runner for the transposed-product kernels.

use std::time::Instant;

use clap::Parser;
use jagmath::matrix::naive_abt::matmul_naive_abt;
use jagmath::{KernelChoice, MatrixRef, matrix_multiply_with, simd_available};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "jagmath", about = "Time the A × Bᵗ kernels on square matrices")]
struct Cli {
    /// Square sizes to run, comma separated
    #[arg(long, value_delimiter = ',', default_value = "256,512,1024")]
    sizes: Vec<usize>,

    /// Timed runs per method (after one warmup)
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Log kernel selection and marshaling at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }

    println!("=== Transposed Product (A × Bᵗ) Benchmark ===\n");

    let has_simd = simd_available();
    println!("CPU Features: AVX2+FMA={}\n", has_simd);

    let iterations = cli.iterations.max(1);
    let mut all_results = Vec::new();

    for &size in &cli.sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let (av, bv) = match (MatrixRef::new(&a, size, size), MatrixRef::new(&b, size, size)) {
            (Ok(av), Ok(bv)) => (av, bv),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("skipping {}: {}", size, e);
                continue;
            }
        };

        let flops = 2.0 * (size * size * size) as f64;
        let mut p = vec![0.0; size * size];
        let mut results: Vec<(&str, (f64, f64))> = Vec::new();

        results.push((
            "Scalar (row·row)",
            bench_fn(iterations, flops, || matmul_naive_abt(&av, &bv, &mut p)),
        ));

        #[cfg(target_arch = "x86_64")]
        {
            if has_simd {
                results.push((
                    "1×4 AVX2 blocked",
                    bench_fn(iterations, flops, || {
                        // SAFETY: avx2/fma detected above
                        unsafe { jagmath::blocked::gemm_abt::matmul_blocked_abt(&av, &bv, &mut p) }
                    }),
                ));
            }
        }

        // Full boundary path: jagged in, jagged out
        let a_rows = to_rows(&a, size);
        let b_rows = to_rows(&b, size);
        results.push((
            "Jagged round trip",
            bench_fn(iterations, flops, || {
                if let Err(e) =
                    matrix_multiply_with(&a_rows, size, size, &b_rows, size, size, KernelChoice::Auto)
                {
                    eprintln!("jagged multiply failed: {}", e);
                }
            }),
        ));

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:18} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    if !all_results.is_empty() {
        print_summary_table(&all_results);
    }
}

fn to_rows(flat: &[f64], n: usize) -> Vec<Vec<f64>> {
    flat.chunks_exact(n.max(1)).map(<[f64]>::to_vec).collect()
}

/// Benchmark one method: one warmup, then average over `iterations`
fn bench_fn<F: FnMut()>(iterations: usize, flops: f64, mut f: F) -> (f64, f64) {
    // Warmup
    f();

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    (avg * 1000.0, flops / avg / 1e9)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<20}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;
        print!("{:<20}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>11.2} GF", gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to the scalar kernel. Higher is better.\n");
}
