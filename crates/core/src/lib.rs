//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid-transformation engine and the session logic
//! around it. It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: tile placement draws from an injected, seedable random source
//! - **Testable**: pushes return their events instead of writing to shared state
//! - **Portable**: can run in any environment (terminal, headless replay, benches)
//!
//! # Module Structure
//!
//! - [`line`]: 1-D compaction of one row or column, with local move/merge events
//! - [`grid`]: N x N level matrix with line extraction and read-only queries
//! - [`engine`]: push in four directions, tile spawning
//! - [`rng`]: randomness port and the default seeded LCG
//! - [`scoring`]: merge points and session bests
//! - [`game`]: game session (start, push + spawn, restart, event queue)
//! - [`snapshot`]: copyable read-only view for renderers
//! - [`config`]: grid size and seed from defaults and environment
//!
//! # Game Rules
//!
//! - A push slides every tile as far as it goes toward one edge
//! - Two equal tiles meeting merge into one tile of the next level, at most once per push
//! - A push that changed the grid spawns one "2" tile on a random empty cell
//! - The game is over when the grid is full and no push changes it
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Game, GameConfig};
//! use tui_2048_types::{Event, GameAction};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.start();
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Opening spawns are queued for the renderer
//! let events = game.take_events();
//! assert!(events.iter().all(|ev| matches!(ev, Event::Spawn { .. })));
//!
//! for action in [GameAction::PushLeft, GameAction::PushUp, GameAction::PushRight] {
//!     game.apply_action(action);
//! }
//! assert!(game.grid().tile_count() >= 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod grid;
pub mod line;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::{parse_direction, parse_moves, Engine, PushResult};
pub use error::EngineError;
pub use game::Game;
pub use grid::Grid;
pub use line::{compact, compact_toward_last, Compacted, LineEvent};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{merge_points, score_events, ScoreTracker};
pub use snapshot::GameSnapshot;
