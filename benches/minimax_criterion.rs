use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::board::Board;
use mailbox_chess::move_generation::move_creator::create_move;
use mailbox_chess::search::minimax::{Minimax, SearchConfig};

/// Italian-game opening reached by a fixed move list.
fn middlegame_board() -> Board {
    let mut board = Board::initial();
    for (from, to) in [(52, 36), (12, 28), (62, 45), (1, 18), (61, 34), (5, 26)] {
        let mv = create_move(&board, from, to);
        board = board
            .current_player()
            .make_move(&mv)
            .expect("opening move should execute")
            .into_board()
            .expect("opening move should complete");
    }
    board
}

fn bench_minimax(c: &mut Criterion) {
    let depth = std::env::var("MAILBOX_BENCH_DEPTH")
        .ok()
        .and_then(|raw| raw.parse::<u8>().ok())
        .unwrap_or(2);

    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let positions = [("startpos", Board::initial()), ("italian", middlegame_board())];
    for (name, board) in &positions {
        for parallel_root in [false, true] {
            let search = Minimax::from_config(SearchConfig {
                depth,
                parallel_root,
            });
            let label = if parallel_root { "parallel" } else { "sequential" };
            group.bench_with_input(
                BenchmarkId::new(format!("{name}_{label}"), depth),
                board,
                |b, board| {
                    b.iter(|| {
                        let result = search
                            .search(black_box(board))
                            .expect("search benchmark run should succeed");
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(minimax_benches, bench_minimax);
criterion_main!(minimax_benches);
