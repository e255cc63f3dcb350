use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use divide_game_ai::{AIEngine, Algorithm, GameState, Side};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best_move");
    let state = GameState::new(15552, Side::Computer).expect("valid start number");

    for depth in [4u32, 6, 8] {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), depth),
                &depth,
                |b, &depth| {
                    let mut ai = AIEngine::default();
                    b.iter(|| ai.search(black_box(&state), depth, algorithm));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
