use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fifteen::core::Board;
use fifteen::types::Dim;

fn bench_board_new(c: &mut Criterion) {
    let dim = Dim::new(9).unwrap();

    c.bench_function("board_new_9x9", |b| {
        b.iter(|| Board::new(black_box(dim)))
    });
}

fn bench_slide(c: &mut Criterion) {
    let mut board = Board::new(Dim::new(9).unwrap());

    // Tile 1 toggles in and out of the corner, so every iteration is a
    // successful scan-and-swap.
    c.bench_function("slide_9x9", |b| {
        b.iter(|| {
            board.slide(black_box(1));
        })
    });
}

fn bench_is_won(c: &mut Criterion) {
    let board = Board::new(Dim::new(9).unwrap());

    c.bench_function("is_won_9x9", |b| {
        b.iter(|| board.is_won())
    });
}

criterion_group!(benches, bench_board_new, bench_slide, bench_is_won);
criterion_main!(benches);
