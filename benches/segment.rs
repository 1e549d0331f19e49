//! Segmentation throughput on synthetic grids.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use grid_zones::core::SequentialIdGenerator;
use grid_zones::{BoundaryTracerKind, Cell, GridIndex, SegmentConfig, ZoneSegmenter};

const LABELS: [&str; 4] = ["red", "green", "blue", "yellow"];

/// A `side` x `side` grid with random labels and about `fill` of the
/// cells present.
fn random_grid(side: i32, fill: f64, seed: u64) -> GridIndex {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut index = GridIndex::new();
    for row in 0..side {
        for col in 0..side {
            if rng.gen_bool(fill) {
                let label = LABELS[rng.gen_range(0..LABELS.len())];
                index.insert(Cell::new((col, row), Some(label), None));
            }
        }
    }
    index
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for side in [16, 64, 256] {
        let index = random_grid(side, 0.7, 42);
        for tracer in [BoundaryTracerKind::Legacy, BoundaryTracerKind::Rings] {
            let config = SegmentConfig::default().with_tracer(tracer);
            group.bench_with_input(
                BenchmarkId::new(format!("{tracer:?}"), side),
                &index,
                |b, index| {
                    b.iter(|| {
                        let mut segmenter =
                            ZoneSegmenter::with_ids(config.clone(), SequentialIdGenerator::new("b"));
                        black_box(segmenter.segment(black_box(index)))
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_single_zone(c: &mut Criterion) {
    // One solid block: a single long boundary.
    let index: GridIndex = (0..128)
        .flat_map(|row| (0..128).map(move |col| Cell::new((col, row), Some("red"), None)))
        .collect();
    let config = SegmentConfig::default();

    c.bench_function("segment_solid_128", |b| {
        b.iter(|| {
            let mut segmenter =
                ZoneSegmenter::with_ids(config.clone(), SequentialIdGenerator::new("b"));
            black_box(segmenter.segment(black_box(&index)))
        })
    });
}

criterion_group!(benches, bench_segment, bench_single_zone);
criterion_main!(benches);
