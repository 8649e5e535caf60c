//! Benchmarks for read access and fill-in

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crsmat::SparseMatrix;

/// Tridiagonal n×n pattern built entry by entry
fn create_tridiagonal(n: usize) -> SparseMatrix<f64> {
    let mut matrix = SparseMatrix::zeros(n, n);
    for i in 0..n {
        if i > 0 {
            matrix.set(i, i - 1, 1.0).unwrap();
        }
        matrix.set(i, i, 2.0).unwrap();
        if i + 1 < n {
            matrix.set(i, i + 1, 1.0).unwrap();
        }
    }
    matrix
}

fn bench_get(c: &mut Criterion) {
    let matrix = create_tridiagonal(1000);

    c.bench_function("get_diagonal", |bench| {
        bench.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                sum += matrix.get(black_box(i), black_box(i)).unwrap();
            }
            sum
        })
    });
}

fn bench_fill_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_in");

    for &n in &[100usize, 1000] {
        // Rows filled in order only ever append at the storage tail
        group.bench_with_input(BenchmarkId::new("row_order", n), &n, |bench, &n| {
            bench.iter(|| create_tridiagonal(black_box(n)))
        });

        // Filling rows back to front shifts every stored entry each time
        group.bench_with_input(BenchmarkId::new("reverse_row_order", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut matrix = SparseMatrix::<f64>::zeros(n, n);
                for i in (0..n).rev() {
                    matrix.set(i, i, 1.0).unwrap();
                }
                matrix
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get, bench_fill_in);
criterion_main!(benches);
