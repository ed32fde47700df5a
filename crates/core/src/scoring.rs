//! Scoring module - points awarded for merges
//!
//! Each merge into level `L` awards `2^L` points, the displayed value of the
//! merged tile. Spawns and plain slides are worth nothing.
//! Best score and best level are kept for the lifetime of the tracker, so they
//! survive restarts within one session (nothing is persisted).

use crate::types::{tile_value, Event, Level, EMPTY, SPAWN_LEVEL};

/// Points for a single merge that produced `level`
pub fn merge_points(level: Level) -> u64 {
    tile_value(level)
}

/// Total points carried by an event batch, saturating at `u64::MAX`
pub fn score_events(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|ev| match ev {
            Event::Merge { level, .. } => merge_points(*level),
            Event::Spawn { .. } | Event::Move { .. } => 0,
        })
        .fold(0, u64::saturating_add)
}

/// Running score for the current game plus session bests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: u64,
    best_score: u64,
    best_level: Level,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for a game that starts from a board already holding `level`
    pub fn with_best_level(level: Level) -> Self {
        Self {
            best_level: level,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Highest level merged or spawned this session
    pub fn best_level(&self) -> Level {
        self.best_level
    }

    /// Score an event batch and return the points gained
    pub fn record(&mut self, events: &[Event]) -> u64 {
        let gained = score_events(events);
        self.score = self.score.saturating_add(gained);
        self.best_score = self.best_score.max(self.score);

        let batch_best = events
            .iter()
            .map(|ev| match ev {
                Event::Merge { level, .. } => *level,
                Event::Spawn { .. } => SPAWN_LEVEL,
                Event::Move { .. } => EMPTY,
            })
            .max()
            .unwrap_or(EMPTY);
        self.best_level = self.best_level.max(batch_best);

        gained
    }

    /// Start a new game: clear the running score, keep the bests
    pub fn reset_game(&mut self) {
        self.score = 0;
    }
}
