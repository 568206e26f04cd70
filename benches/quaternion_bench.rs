//! Benchmarks for vmath
//!
//! Run with: `cargo bench` (add `--features simd` to measure a hardware
//! tier against the scalar baseline).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vmath::{Matrix, Quaternion, Vector};

// ============================================================================
// Quaternion operation benchmarks
// ============================================================================

fn bench_quaternion_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion_ops");

    let a = Quaternion::from_axis_angle(Vector::new(1.0, 2.0, 3.0, 0.0), 0.7);
    let b = Quaternion::from_axis_angle(Vector::new(-1.0, 0.5, 2.0, 0.0), 1.9);
    let v = Vector::new(3.0, -4.0, 12.0, 0.0);

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    group.bench_function("normalize", |bench| {
        bench.iter(|| black_box(Quaternion::new(1.0, 2.0, 3.0, 4.0)).normalize());
    });

    group.bench_function("inverse", |bench| {
        bench.iter(|| black_box(a).inverse());
    });

    group.bench_function("slerp", |bench| {
        bench.iter(|| black_box(a).slerp(black_box(b), black_box(0.35)));
    });

    group.bench_function("rotate", |bench| {
        bench.iter(|| black_box(a).rotate(black_box(v)));
    });

    group.bench_function("chained_composition_64", |bench| {
        bench.iter(|| {
            let mut q = Quaternion::IDENTITY;
            for _ in 0..64 {
                q = q * black_box(a);
            }
            q.normalize()
        });
    });

    group.finish();
}

// ============================================================================
// Vector primitive benchmarks
// ============================================================================

fn bench_vector_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_ops");

    let a = Vector::new(1.5, -2.5, 3.5, -4.5);
    let b = Vector::new(0.25, 8.0, -1.0, 2.0);

    group.bench_function("dot", |bench| {
        bench.iter(|| black_box(a).dot(black_box(b)));
    });

    group.bench_function("cross", |bench| {
        bench.iter(|| black_box(a).cross(black_box(b)));
    });

    group.bench_function("normalize", |bench| {
        bench.iter(|| black_box(a).normalize());
    });

    group.finish();
}

// ============================================================================
// Matrix view benchmarks
// ============================================================================

fn bench_matrix_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_views");

    let m = Matrix::IDENTITY;

    group.bench_function("sum_via_flat", |bench| {
        bench.iter(|| black_box(&m).as_array().iter().sum::<f32>());
    });

    group.bench_function("sum_via_rows", |bench| {
        bench.iter(|| {
            let mut acc = 0.0f32;
            for r in 0..4 {
                let row = black_box(&m).row(r);
                acc += row.x + row.y + row.z + row.w;
            }
            acc
        });
    });

    group.finish();
}

criterion_group!(benches, bench_quaternion_ops, bench_vector_ops, bench_matrix_views);
criterion_main!(benches);
