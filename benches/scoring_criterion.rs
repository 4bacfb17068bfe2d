use criterion::{black_box, criterion_group, criterion_main, Criterion};

use board_recall::board::position::Position;
use board_recall::board::square::Square;
use board_recall::notation::fen::STARTING_PLACEMENT;

fn bench_populate_from_fen(c: &mut Criterion) {
    let mut position = Position::new_empty();

    c.bench_function("populate_from_fen_startpos", |b| {
        b.iter(|| {
            position.populate_from_fen(black_box(STARTING_PLACEMENT));
        });
    });
}

fn bench_matching_squares(c: &mut Criterion) {
    let target = Position::from_fen(STARTING_PLACEMENT);

    let mut attempt = target.clone();
    let e2 = Square::from_algebraic("e2").expect("e2 should parse");
    attempt.set_piece_at(e2, None);

    c.bench_function("matching_squares_one_off", |b| {
        b.iter(|| black_box(&target).matching_squares(black_box(&attempt)));
    });
}

criterion_group!(benches, bench_populate_from_fen, bench_matching_squares);
criterion_main!(benches);
