use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rowan_chess::game_state::board::Board;
use rowan_chess::game_state::chess_types::Color;
use rowan_chess::move_generation::perft::perft_nodes;

const EXPECTED_NODES: &[u64] = &[20, 400, 8_902, 197_281];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = Board::new();

    for (depth_idx, expected) in EXPECTED_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft_nodes(&board, Color::White, depth);
        assert_eq!(warmup, *expected, "node mismatch in warmup at depth {depth}");

        group.throughput(Throughput::Elements(*expected));
        let bench_board = board.clone();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth_{depth}")),
            expected,
            |b, expected| {
                b.iter(|| {
                    let nodes =
                        perft_nodes(black_box(&bench_board), black_box(Color::White), depth);
                    assert_eq!(nodes, *expected);
                    black_box(nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
