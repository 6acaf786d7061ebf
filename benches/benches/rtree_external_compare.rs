// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use canopy::{Aabb, Tree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_boxes(n: usize, cell: f64) -> Vec<([f64; 2], [f64; 2])> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(([x0, y0], [x0 + cell, y0 + cell]));
        }
    }
    out
}

fn to_rstar_rects(v: &[([f64; 2], [f64; 2])]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|(lower, upper)| Rectangle::from_corners(*lower, *upper))
        .collect()
}

fn bench_build_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("external_compare_f64");
    for &n in &[32usize, 64] {
        let boxes = gen_grid_boxes(n, 10.0);
        let probe = ([100.0, 100.0], [500.0, 500.0]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("canopy_build_query_n{}", n), |b| {
            b.iter_batched(
                || boxes.clone(),
                |boxes| {
                    let mut tree: Tree<u32> =
                        Tree::with_params(2, 0.0, boxes.len(), true).expect("tree");
                    for (i, (lower, upper)) in boxes.iter().enumerate() {
                        tree.insert(i as u32, lower, upper).expect("insert");
                    }
                    let aabb = Aabb::new(probe.0.to_vec(), probe.1.to_vec()).expect("probe");
                    let hits = tree.query(&aabb).expect("query").len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(probe.0, probe.1);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_query);
criterion_main!(benches);
