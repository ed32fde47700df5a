//! Game session tests - push/spawn cycles, scoring and restart

use tui_2048::core::{
    merge_points, Engine, Game, GameConfig, Grid, PushResult, RandomSource, SimpleRng,
};
use tui_2048::types::{Direction, Event, GameAction, Level, START_TILES};

fn session(rows: &[[Level; 4]], seed: u32) -> Game {
    Game::from_engine(Engine::with_grid(
        Grid::from_rows(rows).unwrap(),
        SimpleRng::new(seed),
    ))
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::new(GameConfig::new(4, seed)).unwrap();
        game.start();
        for direction in Direction::ALL.iter().cycle().take(40) {
            game.push(*direction);
        }
        (game.grid().clone(), game.score(), game.moves())
    };

    assert_eq!(play(123), play(123));
}

#[test]
fn test_score_grows_by_merge_values() {
    let mut rng = SimpleRng::new(8);
    let mut game = Game::new(GameConfig::new(4, 77)).unwrap();
    game.start();

    for _ in 0..500 {
        let before = game.score();
        let result = game.push(Direction::ALL[rng.next_int(4)]);
        let expected: u64 = result.merged_levels().map(merge_points).sum();
        assert_eq!(game.score(), before + expected);
        if game.game_over() {
            break;
        }
    }
    assert!(game.best_score() >= game.score());
}

#[test]
fn test_push_cycle_appends_exactly_one_spawn() {
    let mut game = session(&[[0, 1, 0, 1], [0; 4], [0; 4], [0; 4]], 5);
    let before = game.grid().tile_sum();
    let result = game.push_left();

    assert!(result.changed);
    let spawns = result
        .events
        .iter()
        .filter(|ev| matches!(ev, Event::Spawn { .. }))
        .count();
    assert_eq!(spawns, 1);
    assert!(matches!(result.events.last(), Some(Event::Spawn { .. })));
    assert_eq!(game.grid().tile_sum(), before + 2);
    assert_eq!(game.score(), 4);
}

#[test]
fn test_each_trigger_pushes_its_direction() {
    let rows = [[0, 0, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let cases: [(fn(&mut Game) -> PushResult, usize, usize); 4] = [
        (Game::push_up, 0, 1),
        (Game::push_down, 3, 1),
        (Game::push_left, 1, 0),
        (Game::push_right, 1, 3),
    ];

    for (trigger, row, col) in cases {
        let mut game = session(&rows, 1);
        assert!(trigger(&mut game).changed);
        assert_eq!(game.grid().row(row)[col], 3);
    }
}

#[test]
fn test_game_over_is_detected_after_last_spawn() {
    // One free cell; the spawn after pushing Left closes the grid.
    let mut game = session(&[[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [0, 3, 4, 5]], 1);
    assert!(!game.game_over());

    let result = game.push_left();
    assert!(result.changed);
    assert_eq!(game.grid().row(3).as_slice(), &[3, 4, 5, 1]);
    assert!(game.game_over());
    assert!(!game.apply_action(GameAction::PushUp));
}

#[test]
fn test_restart_starts_fresh_episode() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.start();
    for _ in 0..20 {
        game.push_left();
        game.push_down();
    }
    let best = game.best_score();

    game.restart();
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.best_score(), best);
    assert_eq!(game.grid().tile_count(), START_TILES);

    let events = game.take_events();
    assert_eq!(events.len(), START_TILES);
    assert!(events.iter().all(|ev| matches!(ev, Event::Spawn { .. })));
}

#[test]
fn test_prefilled_best_level_outlives_restart() {
    let mut game = session(&[[0, 0, 0, 0], [0, 9, 0, 0], [0; 4], [1, 0, 0, 0]], 6);
    assert_eq!(game.snapshot().best_level, game.grid().highest_level());

    game.restart();
    let snap = game.snapshot();
    assert_eq!(snap.best_level, 9);
    assert!(snap.highest_level < 9);
}

#[test]
fn test_invalid_size_is_rejected() {
    assert!(Game::new(GameConfig::new(1, 1)).is_err());
    assert!(Game::new(GameConfig::new(9, 1)).is_err());
    assert!(Game::new(GameConfig::new(8, 1)).is_ok());
}
