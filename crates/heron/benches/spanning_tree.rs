use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use heron::graphlib::{Edge, EdgeWeightedGraph};
use heron::{KruskalMst, MinimumSpanningTree, PrimEagerMst, PrimLazyMst};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

fn build_connected_graph(seed: u64, vertices: usize, edges: usize) -> EdgeWeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = EdgeWeightedGraph::new(vertices);
    for v in 1..vertices {
        let parent = rng.gen_range(0..v);
        let _ = g.add_edge(Edge::new(parent, v, rng.gen::<f64>()));
    }
    for _ in vertices..edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        let _ = g.add_edge(Edge::new(v, w, rng.gen::<f64>()));
    }
    g
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("v1k_e5k", 1_000usize, 5_000usize),
        ("v10k_e60k", 10_000usize, 60_000usize),
    ];

    for (name, vertices, edges) in cases {
        let g = build_connected_graph(7, vertices, edges);
        group.bench_with_input(BenchmarkId::new("kruskal", name), &g, |b, g| {
            b.iter(|| black_box(KruskalMst::new(black_box(g)).weight()))
        });
        group.bench_with_input(BenchmarkId::new("prim_lazy", name), &g, |b, g| {
            b.iter(|| black_box(PrimLazyMst::new(black_box(g)).weight()))
        });
        group.bench_with_input(BenchmarkId::new("prim_eager", name), &g, |b, g| {
            b.iter(|| black_box(PrimEagerMst::new(black_box(g)).weight()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spanning_tree);
criterion_main!(benches);
