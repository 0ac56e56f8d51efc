use chess_rules::board::Board;
use chess_rules::evaluate::game_status;
use chess_rules::move_generation::legal_moves;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME_FEN: &str = "r1bqk2r/ppp2ppp/2n2n2/2bpp3/4P3/2PP1N2/PP1N1PPP/R1BQKB1R w - - 0 6";

fn criterion_benchmark(c: &mut Criterion) {
    let starting_position = Board::starting_position();
    let middlegame: Board = MIDDLEGAME_FEN.parse().expect("benchmark FEN is valid");

    c.bench_function("legal moves (starting position)", |b| {
        let mut board = starting_position.clone();
        b.iter(|| {
            let turn = board.turn();
            black_box(legal_moves(&mut board, turn))
        })
    });

    c.bench_function("legal moves (middlegame)", |b| {
        let mut board = middlegame.clone();
        b.iter(|| {
            let turn = board.turn();
            black_box(legal_moves(&mut board, turn))
        })
    });

    c.bench_function("game status (middlegame)", |b| {
        let mut board = middlegame.clone();
        b.iter(|| black_box(game_status(&mut board)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
