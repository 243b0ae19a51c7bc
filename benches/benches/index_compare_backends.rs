// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use gridnav_index::backends::{FlatVec, RTree};
use gridnav_index::{Aabb2D, Backend, SpatialIndex, SpatialItem};

/// One marker per cell of an `n` x `n` map.
fn gen_grid_items(n: usize) -> Vec<SpatialItem<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(SpatialItem::new(x as f64, y as f64, None, (y * n + x) as u32));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Sized items bunched around random centers, like buildings around towns.
fn gen_clustered_items(n: usize) -> Vec<SpatialItem<u32>> {
    let n_clusters = n / 4;
    let per_cluster = n * 4;
    let world = n as f64 * 4.0;
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64() * world, rng.next_f64() * world);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * 40.0;
            let dy = (rng.next_f64() - 0.5) * 40.0;
            let size = 1.0 + (rng.next_f64() * 3.0).floor();
            out.push(SpatialItem::new(
                (cx + dx).floor(),
                (cy + dy).floor(),
                Some(size),
                out.len() as u32,
            ));
        }
    }
    out
}

/// Viewport-sized query rectangles (`view` cells wide) scattered over the map.
fn gen_viewports(count: usize, world: f64, view: f64) -> Vec<Aabb2D> {
    let mut rng = Rng::new(0x3C6E_F35F_4750_2932);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * world;
            let y = rng.next_f64() * world;
            Aabb2D::from_xywh(x.floor(), y.floor(), view, view * 0.5)
        })
        .collect()
}

fn bench_load(
    c: &mut Criterion,
    benchmark_group_name: &str,
    make_items: impl Fn(usize) -> Vec<SpatialItem<u32>>,
) {
    fn bench<B: Backend + Clone>(
        b: &mut criterion::Bencher<'_>,
        items: &[SpatialItem<u32>],
        empty: &SpatialIndex<SpatialItem<u32>, B>,
    ) {
        b.iter_batched(
            || (empty.clone(), items.to_vec()),
            |(mut idx, items)| {
                idx.load(items);
                idx
            },
            BatchSize::LargeInput,
        );
    }

    let mut group = c.benchmark_group(benchmark_group_name);
    for &n in &[32usize, 128, 512] {
        let items = make_items(n);
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_function(BenchmarkId::new("FlatVec", n), |b| {
            bench(b, &items, &SpatialIndex::with_backend(FlatVec::default()));
        });
        group.bench_function(BenchmarkId::new("RTree", n), |b| {
            bench(b, &items, &SpatialIndex::with_backend(RTree::default()));
        });
    }
    group.finish();
}

fn bench_cull(
    c: &mut Criterion,
    benchmark_group_name: &str,
    make_items: impl Fn(usize) -> Vec<SpatialItem<u32>>,
    world_for: impl Fn(usize) -> f64,
) {
    fn bench<B: Backend>(
        b: &mut criterion::Bencher<'_>,
        items: &[SpatialItem<u32>],
        viewports: &[Aabb2D],
        mut idx: SpatialIndex<SpatialItem<u32>, B>,
    ) {
        idx.load(items.to_vec());
        b.iter(|| {
            let mut total = 0usize;
            for &rect in viewports {
                total += idx.query_aabb(black_box(rect)).len();
            }
            total
        });
    }

    let mut group = c.benchmark_group(benchmark_group_name);
    for &n in &[32usize, 128, 512] {
        let items = make_items(n);
        let viewports = gen_viewports(64, world_for(n), 40.0);
        group.throughput(Throughput::Elements(viewports.len() as u64));
        group.bench_function(BenchmarkId::new("FlatVec", n), |b| {
            bench(b, &items, &viewports, SpatialIndex::with_backend(FlatVec::default()));
        });
        group.bench_function(BenchmarkId::new("RTree", n), |b| {
            bench(b, &items, &viewports, SpatialIndex::with_backend(RTree::default()));
        });
    }
    group.finish();
}

fn bench_load_grid(c: &mut Criterion) {
    bench_load(c, "load_grid", gen_grid_items);
}

fn bench_load_clustered(c: &mut Criterion) {
    bench_load(c, "load_clustered", gen_clustered_items);
}

fn bench_cull_grid(c: &mut Criterion) {
    bench_cull(c, "cull_grid", gen_grid_items, |n| n as f64);
}

fn bench_cull_clustered(c: &mut Criterion) {
    bench_cull(c, "cull_clustered", gen_clustered_items, |n| n as f64 * 4.0);
}

fn bench_visit_point_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit_point_rtree");
    for &cap in &[4usize, 16, 64] {
        let items = gen_grid_items(256);
        let mut idx = SpatialIndex::with_backend(RTree::with_node_capacity(cap));
        idx.load(items);
        let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
        let points: Vec<(f64, f64)> = (0..1024)
            .map(|_| ((rng.next_f64() * 256.0).floor(), (rng.next_f64() * 256.0).floor()))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("node_capacity", cap), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &(x, y) in &points {
                    idx.backend().visit_point(x, y, |_| total += 1);
                }
                total
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load_grid,
    bench_load_clustered,
    bench_cull_grid,
    bench_cull_clustered,
    bench_visit_point_rtree,
);
criterion_main!(benches);
