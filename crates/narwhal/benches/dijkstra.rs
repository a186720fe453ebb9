use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::ShortestPaths;
use narwhal::graph::WeightedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

/// A `side x side` grid with edges in all four directions and random weights in `[1, 10)`.
fn build_grid(side: usize, seed: u64) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = WeightedGraph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            let mut neighbors = Vec::with_capacity(4);
            if col + 1 < side {
                neighbors.push(v + 1);
            }
            if col > 0 {
                neighbors.push(v - 1);
            }
            if row + 1 < side {
                neighbors.push(v + side);
            }
            if row > 0 {
                neighbors.push(v - side);
            }
            for w in neighbors {
                g.add_edge(v, w, rng.gen_range(1.0..10.0)).unwrap();
            }
        }
    }
    g
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    group.measurement_time(Duration::from_secs(10));

    for side in [32usize, 128, 512] {
        let g = build_grid(side, 9);
        let destination = side * side - 1;
        group.bench_with_input(
            BenchmarkId::new("corner_to_corner", format!("grid_{side}")),
            &g,
            |b, g| {
                let mut sp = ShortestPaths::new(g);
                b.iter(|| {
                    sp.compute_optimal_paths(0, black_box(destination)).unwrap();
                    black_box(sp.optimal_cost())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
