use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use domset::graph::{build_graph, greedy_dominating_set, reduce_dominating_set};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_dominating_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominating_set");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for &size in &[10, 50, 100] {
        let graph = build_graph(size, 0.3, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("greedy", size), &graph, |b, graph| {
            b.iter(|| greedy_dominating_set(black_box(graph)))
        });
        group.bench_with_input(BenchmarkId::new("local_search", size), &graph, |b, graph| {
            b.iter(|| reduce_dominating_set(black_box(graph)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dominating_sets);
criterion_main!(benches);
