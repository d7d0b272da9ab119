//! Benchmarks for text measurement and layout

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use rendery_test_utils::SyntheticRasterizer;
use rendery_text::{AtlasConfig, Font};

fn font() -> Font<SyntheticRasterizer> {
    Font::new(SyntheticRasterizer::monospace(9, 8, 12), AtlasConfig::default())
}

fn bench_measure(c: &mut Criterion) {
    let font = font();
    let mut group = c.benchmark_group("measure_text");

    let long_text = "Lorem ipsum dolor sit amet. ".repeat(20);
    let texts: Vec<(&str, &str)> = vec![
        ("single_char", "A"),
        ("short_sentence", "Hello, World!"),
        ("medium_text", "The quick brown fox jumps over the lazy dog"),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        group.bench_function(name, |b| {
            b.iter(|| black_box(font.measure_text(black_box(content), 16.0)));
        });
    }

    group.finish();
}

fn bench_layout_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_text_cached");
    let content = "The quick brown fox jumps over the lazy dog";

    for size in [12.0f32, 16.0, 24.0, 48.0] {
        let mut font = font();
        // Warm the atlas so only layout is measured.
        font.layout_text(content, size, Vec2::ZERO).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size as u32), &size, |b, &size| {
            b.iter(|| black_box(font.layout_text(content, size, Vec2::ZERO).unwrap()));
        });
    }

    group.finish();
}

fn bench_layout_cold(c: &mut Criterion) {
    c.bench_function("layout_text_cold", |b| {
        b.iter_batched(
            font,
            |mut font| black_box(font.layout_text("Hello, World!", 16.0, Vec2::ZERO).unwrap()),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_measure, bench_layout_cached, bench_layout_cold);
criterion_main!(benches);
