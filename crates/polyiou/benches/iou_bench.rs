//! Criterion benchmarks for the convex-overlap engine.
//! Focus sizes: n in {4, 8, 16, 32, 64} vertices per polygon.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyiou::overlap::{intersection_area, iou};
use polyiou::polygon::Polygon;
use polyiou::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};

fn sample_pair(n: usize, seed: u64) -> (Polygon, Polygon) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).expect("sampler");
    let b = draw_polygon_radial(cfg, ReplayToken { seed, index: 1 }).expect("sampler");
    // Shift b so the pair overlaps partially rather than near-identically.
    let b = Polygon::new(
        b.verts
            .iter()
            .map(|v| v + nalgebra::vector![0.5, 0.25])
            .collect(),
    );
    (a, b)
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap");
    for &n in &[4usize, 8, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("intersection_area", n), &n, |b, &n| {
            b.iter_batched(
                || sample_pair(n, 43),
                |(p, q)| {
                    let _a = intersection_area(&p, &q);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("iou", n), &n, |b, &n| {
            b.iter_batched(
                || sample_pair(n, 44),
                |(p, q)| {
                    let _r = iou(&p, &q);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlap);
criterion_main!(benches);
