use checkers_engine::{validate_and_apply, Board, Color, Piece, Position};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn all_steps(board: &Board) -> usize {
    board
        .pieces()
        .map(|piece| piece.possible_steps(board).len())
        .sum()
}

fn chain_board() -> Board {
    let mut board = Board::empty();
    board.place(Piece::new(Color::Red, Position::new(7, 0))).unwrap();
    for (row, col) in [(6, 1), (4, 3), (2, 5)] {
        board
            .place(Piece::new(Color::Black, Position::new(row, col)))
            .unwrap();
    }
    board
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("duplicate starting board", |b| {
        b.iter(|| black_box(Board::initial_starting()).duplicate())
    });
    c.bench_function("all steps on starting board", |b| {
        b.iter(|| all_steps(black_box(&Board::initial_starting())))
    });
}

fn validation_benchmark(c: &mut Criterion) {
    c.bench_function("validate single slide", |b| {
        b.iter(|| {
            let mut board = Board::initial_starting();
            validate_and_apply(&mut board, Position::new(5, 0), &[Position::new(4, 1)])
        })
    });
    let steps = [
        Position::new(5, 2),
        Position::new(3, 4),
        Position::new(1, 6),
    ];
    c.bench_function("validate triple jump", |b| {
        b.iter(|| {
            let mut board = chain_board();
            validate_and_apply(&mut board, Position::new(7, 0), black_box(&steps))
        })
    });
}

criterion_group!(benches, utils_benchmark, validation_benchmark);
criterion_main!(benches);
