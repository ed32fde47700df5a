//! Game session module - turns player input into engine calls
//!
//! A [`Game`] owns one [`Engine`], the score tracker and the queue of events
//! waiting for the renderer. Each push runs the engine, spawns a tile when
//! the grid changed, scores merges, then re-checks for game over.
//!
//! Calls must be serialized: one push (and its spawn) completes before the
//! next input is accepted. Independent sessions are just independent values.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::engine::{Engine, PushResult};
use crate::error::EngineError;
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::ScoreTracker;
use crate::snapshot::GameSnapshot;
use crate::types::{tile_value, Direction, Event, GameAction, START_TILES};

/// A single-player game session
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    engine: Engine<R>,
    score: ScoreTracker,
    /// Events not yet taken by the renderer, in emission order
    pending: Vec<Event>,
    moves: u32,
    /// Monotonic game id (increments on restart)
    episode_id: u32,
    started: bool,
    game_over: bool,
}

impl Game<SimpleRng> {
    /// Create a session from configuration, using the seeded LCG
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config.grid_size, SimpleRng::new(config.seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a session with an injected random source
    pub fn with_rng(size: usize, rng: R) -> Result<Self, EngineError> {
        Ok(Self::from_engine(Engine::new(size, rng)?))
    }

    /// Wrap an engine whose grid may already hold tiles.
    ///
    /// A non-empty grid counts as a started game, and its highest tile
    /// seeds the best level.
    pub fn from_engine(engine: Engine<R>) -> Self {
        let started = engine.grid().tile_count() > 0;
        let game_over = started && !engine.grid().has_moves();
        let score = ScoreTracker::with_best_level(engine.highest_level());
        Self {
            engine,
            score,
            pending: Vec::new(),
            moves: 0,
            episode_id: 0,
            started,
            game_over,
        }
    }

    /// Spawn the opening tiles. Does nothing once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let mut opening = Vec::with_capacity(START_TILES);
        for _ in 0..START_TILES {
            match self.engine.spawn_tile() {
                Ok(ev) => opening.push(ev),
                Err(err) => warn!(%err, "could not place opening tile"),
            }
        }
        self.score.record(&opening);
        self.pending.extend_from_slice(&opening);

        info!(
            episode = self.episode_id,
            size = self.engine.size(),
            "game started"
        );
    }

    /// Push, then spawn one tile if anything moved.
    ///
    /// The returned events are the push events followed by the spawn, and are
    /// also queued for [`Game::take_events`].
    pub fn push(&mut self, direction: Direction) -> PushResult {
        let mut result = self.engine.push(direction);

        if result.changed {
            self.moves += 1;
            match self.engine.spawn_tile() {
                Ok(ev) => result.events.push(ev),
                // A changed push always leaves a free cell.
                Err(err) => warn!(%err, %direction, "no room to spawn after push"),
            }
        }

        let gained = self.score.record(&result.events);
        self.pending.extend_from_slice(&result.events);

        let was_over = self.game_over;
        self.game_over = self.started && !self.engine.grid().has_moves();
        if self.game_over && !was_over {
            info!(
                episode = self.episode_id,
                score = self.score.score(),
                moves = self.moves,
                highest = tile_value(self.engine.highest_level()),
                "game over"
            );
        } else if gained > 0 {
            debug!(gained, score = self.score.score(), "merged");
        }

        result
    }

    pub fn push_up(&mut self) -> PushResult {
        self.push(Direction::Up)
    }

    pub fn push_down(&mut self) -> PushResult {
        self.push(Direction::Down)
    }

    pub fn push_left(&mut self) -> PushResult {
        self.push(Direction::Left)
    }

    pub fn push_right(&mut self) -> PushResult {
        self.push(Direction::Right)
    }

    /// Apply a game action; returns true if the grid changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(direction) => self.push(direction).changed,
            None => {
                self.restart();
                true
            }
        }
    }

    /// Clear the grid and start a new game. Best score and level are kept.
    ///
    /// Undelivered events from the previous game are dropped; renderers
    /// should clear their tiles before applying the new opening events.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.score.reset_game();
        self.pending.clear();
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = false;
        self.game_over = false;
        self.start();
    }

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (no allocation)
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        let grid = self.engine.grid();
        snap.size = grid.size();
        for (i, level) in grid.cells().iter().enumerate() {
            snap.cells[i / grid.size()][i % grid.size()] = *level;
        }
        snap.score = self.score.score();
        snap.best_score = self.score.best_score();
        snap.highest_level = grid.highest_level();
        snap.best_level = self.score.best_level();
        snap.moves = self.moves;
        snap.episode_id = self.episode_id;
        snap.started = self.started;
        snap.game_over = self.game_over;
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn best_score(&self) -> u64 {
        self.score.best_score()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }
}
