// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Vec2};
use vitrine_regions::{LocalRegion, QueryFilter, RegionId, Tree};

const PANE: Rect = Rect::new(400.0, 0.0, 1200.0, 800.0);
const ROW_H: f64 = 40.0;

/// A clipped pane whose content column holds `rows` stacked rows.
fn build_pane(rows: usize) -> (Tree, RegionId) {
    let mut tree = Tree::new();
    let pane = tree.insert(
        None,
        LocalRegion {
            local_bounds: PANE,
            local_clip: Some(PANE),
            ..Default::default()
        },
    );
    let height = rows as f64 * ROW_H;
    let content = tree.insert(
        Some(pane),
        LocalRegion::with_bounds(Rect::new(PANE.x0, 0.0, PANE.x1, height)),
    );
    for i in 0..rows {
        let y0 = i as f64 * ROW_H;
        let _ = tree.insert(
            Some(content),
            LocalRegion::with_bounds(Rect::new(PANE.x0, y0, PANE.x1, y0 + ROW_H)),
        );
    }
    let _ = tree.commit();
    (tree, content)
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_hit_test");
    for rows in [64_usize, 512, 4096] {
        let (tree, _) = build_pane(rows);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("hit_point_rows{rows}"), |b| {
            b.iter(|| black_box(tree.hit_test_point(black_box(Point::new(800.0, 420.0)), QueryFilter::POINTER)));
        });
        group.bench_function(format!("visible_rows{rows}"), |b| {
            b.iter(|| black_box(tree.intersect_rect(PANE, QueryFilter::VISIBLE).count()));
        });
    }
    group.finish();
}

fn bench_scroll_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_scroll_commit");
    for rows in [64_usize, 512] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(format!("translate_commit_rows{rows}"), |b| {
            b.iter_batched(
                || build_pane(rows),
                |(mut tree, content)| {
                    tree.set_local_transform(content, Affine::translate(Vec2::new(0.0, -333.0)));
                    black_box(tree.commit());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_scroll_commit);
criterion_main!(benches);
