use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{can_place, rotate_cw, shape_of, Board, Game};
use blockfall::types::{Command, PieceKind};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut game = Game::new(12345);
        game.start();
        b.iter(|| {
            if !game.tick() {
                game.start();
            }
            black_box(game.score())
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| black_box(&board).clear_rows())
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new();
    let shape = shape_of(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| can_place(black_box(&board), black_box(&shape), 4, 10))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = shape_of(PieceKind::J);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| rotate_cw(black_box(&shape)))
    });
}

fn bench_hard_drop_lock(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        let mut game = Game::new(12345);
        game.start();
        b.iter(|| {
            game.apply(Command::HardDrop);
            if !game.tick() {
                game.start();
            }
            black_box(game.score())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_rows,
    bench_can_place,
    bench_rotate,
    bench_hard_drop_lock
);
criterion_main!(benches);
