use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matfile::{Matrix, codec, matmul_naive_ijk, multiply, multiply_parallel};

fn test_matrix(size: usize, modulus: usize) -> Matrix {
    let data = (0..size * size).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(size, size, data)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [64, 128, 256] {
        let a = test_matrix(size, 100);
        let b = test_matrix(size, 97);

        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut out = vec![0.0; n * n];
                matmul_naive_ijk(black_box(a.as_slice()), black_box(b.as_slice()), &mut out, n, n, n);
                out
            })
        });
        group.bench_with_input(BenchmarkId::new("ikj", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("ikj_mt4", size), &size, |bench, _| {
            bench.iter(|| multiply_parallel(black_box(&a), black_box(&b), 4))
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let m = test_matrix(256, 1000);
    let text = codec::to_text(&m);

    c.bench_function("codec/serialize_256", |bench| {
        bench.iter(|| codec::to_text(black_box(&m)))
    });
    c.bench_function("codec/parse_256", |bench| {
        bench.iter(|| codec::parse_matrix(black_box(&text)))
    });
}

criterion_group!(benches, bench_multiply, bench_codec);
criterion_main!(benches);
