use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{get_shape, Board, GameSnapshot, GameState};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_until_lock", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(12345));
            for _ in 0..20 {
                state.tick();
            }
            state
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::new();
    let shape = get_shape(PieceKind::T, 0);

    c.bench_function("is_collision", |b| {
        b.iter(|| board.is_collision(black_box(&shape), black_box(4), black_box(10)))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.move_left();
            state.rotate();
            state.move_right();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_move_and_rotate,
    bench_snapshot
);
criterion_main!(benches);
