//! Benchmarks for line and polygon clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use clip2d::{
    clip_segment, sutherland_hodgman, ClipRect, Point2, Polygon, Rounding, Segment2,
};

/// Generates a fan of segments around the window center, alternating
/// between fully inside, crossing, and fully outside.
fn generate_segment_fan(num_segments: usize) -> Vec<Segment2<f64>> {
    (0..num_segments)
        .map(|i| {
            let angle = i as f64 / num_segments as f64 * 2.0 * std::f64::consts::PI;
            let reach = 2.0 + ((i * 7) % 20) as f64; // Deterministic spread
            Segment2::new(
                Point2::new(5.0, 5.0),
                Point2::new(5.0 + angle.cos() * reach, 5.0 + angle.sin() * reach),
            )
        })
        .collect()
}

/// Generates a regular convex n-gon centered at (cx, cy).
fn generate_ngon(n: usize, cx: f64, cy: f64, radius: f64) -> Polygon<f64> {
    Polygon::new(
        (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
                Point2::new(cx + angle.cos() * radius, cy + angle.sin() * radius)
            })
            .collect(),
    )
}

fn bench_clip_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_segment");
    let rect = ClipRect::from_coords(0.0, 0.0, 10.0, 10.0).unwrap();

    for size in [100, 1000, 10000] {
        let segments = generate_segment_fan(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("fan", size), &segments, |b, segs| {
            b.iter(|| {
                for &s in segs {
                    black_box(clip_segment(black_box(s), rect, Rounding::Pixel));
                }
            })
        });
    }

    group.finish();
}

fn bench_sutherland_hodgman(c: &mut Criterion) {
    let mut group = c.benchmark_group("sutherland_hodgman");
    let clip = generate_ngon(8, 5.0, 5.0, 6.0);

    for size in [8, 64, 512] {
        let subject = generate_ngon(size, 7.0, 7.0, 8.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ngon", size), &subject, |b, poly| {
            b.iter(|| {
                black_box(sutherland_hodgman(
                    black_box(poly),
                    black_box(&clip),
                    Rounding::Pixel,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clip_segment, bench_sutherland_hodgman);
criterion_main!(benches);
