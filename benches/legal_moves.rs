use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shutthebox::{BoardConfig, BoardState, Move};

fn full_board(c: &mut Criterion) {
    let board = BoardState::standard();
    c.bench_function("legal_moves full board", |b| {
        b.iter(|| board.legal_moves(black_box(7)))
    });
}

fn sparse_board(c: &mut Criterion) {
    let mut board = BoardState::standard();
    board.flip(&Move::new(vec![9]).unwrap()).unwrap();
    board.flip(&Move::new(vec![2, 6]).unwrap()).unwrap();
    c.bench_function("legal_moves sparse board", |b| {
        b.iter(|| board.legal_moves(black_box(7)))
    });
}

fn wide_board(c: &mut Criterion) {
    let board = BoardState::new(BoardConfig {
        tiles: 20,
        max_flips: 4,
    })
    .unwrap();
    c.bench_function("legal_moves wide board", |b| {
        b.iter(|| board.legal_moves(black_box(19)))
    });
}

criterion_group!(benches, full_board, sparse_board, wide_board);
criterion_main!(benches);
