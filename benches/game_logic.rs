use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_columns::core::{detect_matches, Board, GameState};
use tui_columns::types::{Cell, Jewel, BOARD_COLS, VISIBLE_ROWS};

fn populated_board() -> Board {
    let mut board = Board::new(VISIBLE_ROWS, BOARD_COLS);
    // Checkerboard of jewel colors with no runs of three.
    for row in 8..board.rows() as i16 {
        for col in 0..board.cols() as i16 {
            let jewel = Jewel::ALL[((row + 2 * col) % 5) as usize];
            board.set(row, col, Cell::Jewel(jewel));
        }
    }
    board
}

fn bench_advance_tick(c: &mut Criterion) {
    c.bench_function("advance_tick", |b| {
        b.iter(|| {
            let mut game = GameState::new(VISIBLE_ROWS, BOARD_COLS, black_box(12345));
            game.spawn_faller(3, &[Jewel::Red, Jewel::Green, Jewel::Blue])
                .unwrap();
            game.advance_tick().unwrap();
        })
    });
}

fn bench_detect_matches(c: &mut Criterion) {
    let board = populated_board();

    c.bench_function("detect_matches_populated", |b| {
        b.iter(|| detect_matches(black_box(&board)))
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_scattered_columns", |b| {
        b.iter(|| {
            let mut board = Board::new(VISIBLE_ROWS, BOARD_COLS);
            for row in (3..board.rows() as i16).step_by(2) {
                for col in 0..board.cols() as i16 {
                    board.set(row, col, Cell::Jewel(Jewel::Cyan));
                }
            }
            board.settle();
        })
    });
}

fn bench_spawn_random_faller(c: &mut Criterion) {
    c.bench_function("spawn_random_faller", |b| {
        b.iter(|| {
            let mut game = GameState::new(VISIBLE_ROWS, BOARD_COLS, black_box(12345));
            game.spawn_random_faller().unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_advance_tick,
    bench_detect_matches,
    bench_settle,
    bench_spawn_random_faller
);
criterion_main!(benches);
