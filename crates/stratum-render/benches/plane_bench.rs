//! Benchmarks for overlap-safe plane moves.
//!
//! Run with:
//! `cargo bench -p stratum-render --bench plane_bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stratum_core::geometry::{Point, Rect};
use stratum_render::plane::{PixelPlane, PlaneBlit};

fn bench_move_rect(c: &mut Criterion) {
    let bounds = Rect::from_origin_size(0, 0, 640, 480);
    let mut group = c.benchmark_group("plane/move_rect");

    for (name, offset) in [
        ("scroll_up", Point::new(0, -16)),
        ("scroll_down", Point::new(0, 16)),
        ("pan_left", Point::new(-16, 0)),
        ("diagonal", Point::new(8, 8)),
    ] {
        let dest = Rect::new(32, 32, 608, 448);
        group.throughput(Throughput::Elements(dest.area()));
        let mut plane = PixelPlane::from_fn(bounds, |x, y| (x ^ y) as u32);
        group.bench_function(BenchmarkId::new("640x480", name), |b| {
            b.iter(|| {
                plane.move_rect(black_box(dest), black_box(offset));
                black_box(plane.pixels()[0]);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_rect);
criterion_main!(benches);
