extern crate cfour;

use cfour::board::*;
use cfour::engine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::from_move_list("3, 3, 2, 4").unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("choose_move 4", |b| {
        b.iter(|| engine::choose_move(black_box(&board), black_box(4), &mut rng, &mut |_| {}))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
