use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{compact, compact_toward_last, Engine, Game, GameConfig, Grid, SimpleRng};
use tui_2048::types::{Direction, Level};

fn bench_compact(c: &mut Criterion) {
    let line: [Level; 8] = [1, 1, 0, 2, 2, 2, 0, 3];

    c.bench_function("compact_line_8", |b| {
        b.iter(|| compact(black_box(&line[..])))
    });
    c.bench_function("compact_toward_last_8", |b| {
        b.iter(|| compact_toward_last(black_box(&line[..])))
    });
}

fn bench_push(c: &mut Criterion) {
    let grid = Grid::from_rows(&[[1, 1, 2, 0], [0, 2, 2, 3], [1, 0, 0, 1], [4, 4, 4, 4]]).unwrap();

    for direction in Direction::ALL {
        c.bench_function(&format!("push_{direction}_4x4"), |b| {
            b.iter(|| {
                let mut engine = Engine::with_grid(grid.clone(), SimpleRng::new(1));
                black_box(engine.push(black_box(direction)))
            })
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    let mut engine = Engine::new(8, SimpleRng::new(12345)).unwrap();

    c.bench_function("spawn_tile_8x8", |b| {
        b.iter(|| {
            engine.reset();
            black_box(engine.spawn_tile())
        })
    });
}

fn bench_game_cycle(c: &mut Criterion) {
    c.bench_function("game_push_cycle", |b| {
        let mut game = Game::new(GameConfig::new(4, 12345)).unwrap();
        game.start();
        let mut i = 0usize;
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            let result = game.push(Direction::ALL[i % 4]);
            i += 1;
            black_box(game.take_events());
            result.changed
        })
    });
}

criterion_group!(benches, bench_compact, bench_push, bench_spawn, bench_game_cycle);
criterion_main!(benches);
