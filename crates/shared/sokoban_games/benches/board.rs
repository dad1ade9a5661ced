//! Criterion benchmarks for the move rules.
//!
//! Run with:
//!   cargo bench -p sokoban_games

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_games::{Board, Direction, Level};

fn bench_valid_moves(c: &mut Criterion) {
    let board = Board::new(Level::example());
    c.bench_function("valid_moves", |b| b.iter(|| black_box(board.valid_moves())));
}

fn bench_script(c: &mut Criterion) {
    c.bench_function("play_script_restart", |b| {
        let mut board = Board::new(Level::example());
        b.iter(|| {
            board.play_script(black_box("RRLUDDLRRUDL"));
            let solved = board.is_solved();
            board.restart();
            black_box(solved)
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = Level::example().to_text();
    c.bench_function("level_parse", |b| {
        b.iter(|| black_box(Level::parse(black_box(&text))))
    });
}

fn bench_push_undo(c: &mut Criterion) {
    c.bench_function("push_undo", |b| {
        let mut board = Board::new(Level::example());
        b.iter(|| {
            board.apply_move(Direction::Right);
            board.undo()
        });
    });
}

criterion_group!(benches, bench_valid_moves, bench_script, bench_parse, bench_push_undo);
criterion_main!(benches);
