//! Benchmarks for histmatch operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use histmatch_core::Plane;
use histmatch_curve::{BuildOptions, Curve, Histogram};

/// Deterministic plane with a busy histogram.
fn test_plane(width: u32, height: u32, seed: u32) -> Plane {
    let mut data = Vec::with_capacity((width * height) as usize);
    let mut state = seed | 1;
    for _ in 0..width * height {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        data.push((state >> 24) as u8);
    }
    Plane::from_vec(data, width, height, width as usize).unwrap()
}

/// Benchmark histogram accumulation over increasing plane sizes.
fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");

    for size in [256u32, 1024, 1920].iter() {
        let key = test_plane(*size, *size, 7);
        let value = test_plane(*size, *size, 11);

        group.throughput(Throughput::Elements(*size as u64 * *size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| Histogram::accumulate(black_box(&key.view()), black_box(&value.view())))
        });
    }

    group.finish();
}

/// Benchmark full curve builds, raw vs postprocessed.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let key = test_plane(1920, 1080, 7);
    let value = test_plane(1920, 1080, 11);
    group.throughput(Throughput::Elements(1920 * 1080));

    group.bench_function("raw", |b| {
        let options = BuildOptions {
            raw: true,
            smoothing_window: 0,
        };
        b.iter(|| Curve::build(black_box(&key.view()), black_box(&value.view()), &options))
    });

    group.bench_function("refined", |b| {
        let options = BuildOptions::default();
        b.iter(|| Curve::build(black_box(&key.view()), black_box(&value.view()), &options))
    });

    group.finish();
}

/// Benchmark curve application to an HD plane.
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    let src = test_plane(1920, 1080, 7);
    let curve = Curve::identity();
    group.throughput(Throughput::Elements(1920 * 1080));

    group.bench_function("separate_dst", |b| {
        let mut dst = Plane::new(1920, 1080);
        b.iter(|| curve.apply(black_box(&src.view()), &mut dst.view_mut()))
    });

    group.bench_function("in_place", |b| {
        let mut plane = test_plane(1920, 1080, 7);
        b.iter(|| curve.apply_in_place(black_box(&mut plane.view_mut())))
    });

    group.finish();
}

criterion_group!(benches, bench_accumulate, bench_build, bench_apply);
criterion_main!(benches);
