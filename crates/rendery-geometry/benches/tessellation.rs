//! Benchmarks for shape tessellation

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use rendery_geometry::{
    polyline_miter, polyline_miter_vertex_count, regular_polygon_points,
    triangulate_unordered_convex,
};

fn wave(points: usize) -> Vec<Vec2> {
    (0..points)
        .map(|i| Vec2::new(i as f32 * 4.0, (i as f32 * 0.3).sin() * 20.0))
        .collect()
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline_miter");

    for count in [4usize, 64, 1024] {
        let points = wave(count);
        let mut out = Vec::with_capacity(polyline_miter_vertex_count(count, false));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                out.clear();
                polyline_miter(black_box(points), 2.0, false, &mut out).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_unordered_convex(c: &mut Criterion) {
    let mut group = c.benchmark_group("unordered_convex");

    for sides in [8usize, 64, 512] {
        let mut points = Vec::new();
        regular_polygon_points(Vec2::ZERO, 100.0, sides, 0.0, &mut points);
        points.reverse();
        let mut out = Vec::new();
        group.bench_with_input(BenchmarkId::from_parameter(sides), &points, |b, points| {
            b.iter(|| {
                out.clear();
                triangulate_unordered_convex(black_box(points), &mut out).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_polyline, bench_unordered_convex);
criterion_main!(benches);
