// Copyright 2022 The boardkit developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boardkit::core::{GridIndex, Square};
use boardkit::{movegen, Board};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("rook-discover", |b| {
        let board = Board::from_fen("8/8/8/3r4/8/8/8/8 b - - 0 1").unwrap();
        let origin = GridIndex::of("d5".parse().unwrap());
        b.iter(|| movegen::discover_moves(black_box(board.grid()), black_box(origin)));
    });

    c.bench_function("king-discover", |b| {
        let board = Board::new();
        let origin = GridIndex::of("e1".parse().unwrap());
        b.iter(|| movegen::discover_moves(black_box(board.grid()), black_box(origin)));
    });

    c.bench_function("click-select-move", |b| {
        let board = Board::new();
        let from: Square = "e1".parse().unwrap();
        let to: Square = "e2".parse().unwrap();
        b.iter(|| {
            let mut board = *black_box(&board);
            board.notify_click(black_box(from));
            board.notify_click(black_box(to));
            board.side_to_move()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
