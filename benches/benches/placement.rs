// Copyright 2025 the Trueline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use trueline_geometry::glam::{DAffine3, DQuat, DVec3};
use trueline_geometry::{
    Axis, AxisBounds, Extent, GridItem, GridSpec, SpacingMode, distribute, grid_layout,
    space_inside,
};

/// Deterministic, unsorted extents with varying widths.
fn scattered_extents(len: usize) -> Vec<Extent> {
    (0..len)
        .map(|i| {
            // Multiplicative scramble so the planners have real sorting work.
            let position = ((i * 7_919) % len) as f64 * 1.5;
            let width = 0.5 + (i % 5) as f64 * 0.25;
            Extent::new(position, position - width * 0.5, width)
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/distribute");

    for len in [16usize, 256, 4_096] {
        let extents = scattered_extents(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("center", len), &extents, |b, e| {
            b.iter(|| black_box(distribute(black_box(e), SpacingMode::Center)));
        });
        group.bench_with_input(BenchmarkId::new("gap", len), &extents, |b, e| {
            b.iter(|| black_box(distribute(black_box(e), SpacingMode::Gap)));
        });
        group.bench_with_input(BenchmarkId::new("space_inside", len), &extents, |b, e| {
            b.iter(|| black_box(space_inside(black_box(e), SpacingMode::Gap, 0.0, 100.0)));
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/grid");

    for len in [16usize, 256, 4_096] {
        let items: Vec<GridItem> = scattered_extents(len)
            .iter()
            .map(|e| GridItem {
                order_key: e.position,
                position: Point::new(e.position, e.width),
            })
            .collect();
        let spec = GridSpec {
            columns: 8,
            spacing: Vec2::new(2.0, 2.0),
        };
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("layout", len), &items, |b, items| {
            b.iter(|| black_box(grid_layout(black_box(items), &spec)));
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/bounds");

    for len in [16usize, 256, 4_096] {
        let local = AxisBounds::new(DVec3::splat(-0.5), DVec3::splat(0.5));
        let matrices: Vec<DAffine3> = (0..len)
            .map(|i| {
                DAffine3::from_scale_rotation_translation(
                    DVec3::splat(1.0 + (i % 3) as f64),
                    DQuat::from_rotation_z(i as f64 * 0.1),
                    DVec3::new(i as f64, (i % 7) as f64, 0.0),
                )
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("transform_and_union", len),
            &matrices,
            |b, matrices| {
                b.iter(|| {
                    let union = AxisBounds::union(matrices.iter().map(|m| local.transformed(m)));
                    black_box(union.center_on(Axis::X))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distribute, bench_grid, bench_bounds);
criterion_main!(benches);
