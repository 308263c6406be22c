use benchmarks::{synthetic_matrix, synthetic_splits};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatscaler_rs::preprocessing::FlatMinMaxScaler;

fn bench_fit(c: &mut Criterion) {
    // Test different array sizes
    for rows in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("fit", rows), rows, |b, &n| {
            let data = synthetic_matrix(n, 16, 1);

            b.iter(|| {
                let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
                scaler.fit([black_box(&data)]).unwrap();
                black_box(scaler.scale_factor());
            });
        });
    }
}

fn bench_fit_pooled(c: &mut Criterion) {
    // Same total size as bench_fit, split across several arrays
    for splits in [1, 4, 16].iter() {
        c.bench_with_input(BenchmarkId::new("fit_pooled", splits), splits, |b, &k| {
            let data = synthetic_splits(k, 10000 / k, 16);

            b.iter(|| {
                let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
                scaler.fit(black_box(&data)).unwrap();
                black_box(scaler.scale_factor());
            });
        });
    }
}

fn bench_transform(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("transform", rows), rows, |b, &n| {
            let data = synthetic_matrix(n, 16, 2);
            let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
            scaler.fit([&data]).unwrap();

            b.iter(|| {
                let scaled = scaler.transform(black_box(&data)).unwrap();
                black_box(scaled);
            });
        });
    }
}

fn bench_transform_inplace(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("transform_inplace", rows), rows, |b, &n| {
            let data = synthetic_matrix(n, 16, 3);
            let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
            scaler.fit([&data]).unwrap();

            b.iter(|| {
                let mut work = data.clone();
                scaler.transform_inplace(black_box(&mut work)).unwrap();
                black_box(work);
            });
        });
    }
}

fn bench_inverse_transform(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("inverse_transform", rows), rows, |b, &n| {
            let data = synthetic_matrix(n, 16, 4);
            let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
            scaler.fit([&data]).unwrap();
            let scaled = scaler.transform(&data).unwrap();

            b.iter(|| {
                let recovered = scaler.inverse_transform(black_box(&scaled)).unwrap();
                black_box(recovered);
            });
        });
    }
}

criterion_group!(
    benches,
    bench_fit,
    bench_fit_pooled,
    bench_transform,
    bench_transform_inplace,
    bench_inverse_transform
);
criterion_main!(benches);
