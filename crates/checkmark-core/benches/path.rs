//! Benchmarks for path flattening and stroke trimming.
//!
//! Trimming runs on every painted frame of an animated stroke, so it should
//! stay cheap relative to a 16 ms frame even for large controls.

use checkmark_core::{Path, Point, Rect};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f32::consts::PI;

fn ring_and_check(side: f32) -> Path {
    let r = side / 2.0;
    Path::new()
        .arc(Point::new(r, r), r, 3.15 * PI, 1.15 * PI, false)
        .line_to(Point::new(side * 0.42, side * 0.68))
        .line_to(Point::new(side * 0.84, side * 0.28))
}

// =============================================================================
// Flattening
// =============================================================================

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_flatten");

    for side in [25.0f32, 50.0, 200.0, 1000.0].iter() {
        let path = ring_and_check(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &path, |b, path| {
            b.iter(|| black_box(path).flatten());
        });
    }

    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let path = Path::circle_in_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
    c.bench_function("path_length_circle", |b| {
        b.iter(|| black_box(&path).length());
    });
}

// =============================================================================
// Trimming
// =============================================================================

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_trim");
    let path = ring_and_check(50.0);

    for (name, start, end) in [
        ("unchecked", 0.0, 0.735),
        ("checked", 0.815, 0.98),
        ("full", 0.0, 1.0),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(&path).trim(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_length, bench_trim);
criterion_main!(benches);
