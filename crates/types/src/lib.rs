//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, terminal rendering, scripted replays).
//!
//! # Levels
//!
//! Cells store a *level* rather than the displayed number:
//!
//! | Level | Tile |
//! |-------|------|
//! | 0 | empty |
//! | 1 | 2 |
//! | 2 | 4 |
//! | 11 | 2048 |
//!
//! # Grid Dimensions
//!
//! The grid is square. Its side length is fixed when the grid is created:
//!
//! - **Default**: 4x4
//! - **Range**: 2x2 up to 8x8
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Coord, Direction, Event, GameAction, tile_value};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert!(Direction::Left.is_horizontal());
//! assert!(Direction::Left.is_toward_first());
//!
//! // Actions carry the push direction
//! assert_eq!(GameAction::PushDown.direction(), Some(Direction::Down));
//!
//! // Events carry grid coordinates
//! let ev = Event::Move { from: Coord::new(0, 0), to: Coord::new(3, 0) };
//! assert!(!ev.is_noop());
//!
//! assert_eq!(tile_value(11), 2048);
//! ```

use std::fmt;

/// Exponent stored in a grid cell. `0` is empty, level `L` displays `2^L`.
pub type Level = u8;

/// Level of an empty cell
pub const EMPTY: Level = 0;

/// Level assigned to every freshly spawned tile (displayed as "2")
pub const SPAWN_LEVEL: Level = 1;

/// Default grid side length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported grid side length
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported grid side length
///
/// Line buffers are stack-allocated with this capacity.
pub const MAX_GRID_SIZE: usize = 8;

/// Number of tiles spawned when a game starts
pub const START_TILES: usize = 2;

/// Highest level a cell can hold (tile `2^62`).
///
/// Two tiles at this level do not merge, so displayed values and score
/// arithmetic stay within `u64`.
pub const MAX_LEVEL: Level = 62;

/// Displayed value of a tile at the given level (`2^level`, 0 for empty).
///
/// # Examples
///
/// ```
/// use tui_2048_types::tile_value;
///
/// assert_eq!(tile_value(0), 0);
/// assert_eq!(tile_value(1), 2);
/// assert_eq!(tile_value(3), 8);
/// assert_eq!(tile_value(64), u64::MAX);
/// ```
///
/// Levels too large for `u64` saturate.
pub fn tile_value(level: Level) -> u64 {
    if level == EMPTY {
        0
    } else {
        1u64.checked_shl(u32::from(level)).unwrap_or(u64::MAX)
    }
}

/// A (row, column) cell position; row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Swap row and column
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Stable square key, e.g. `sq-03` for row 0 column 3.
    ///
    /// Renderers use it to look up the tile occupying a square.
    pub fn square(&self) -> String {
        format!("sq-{}{}", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Push directions
///
/// Each direction is classified along two axes:
/// - **vertical** (Up/Down) vs **horizontal** (Left/Right)
/// - **toward-first** (Up/Left compact toward index 0) vs
///   **toward-last** (Down/Right compact toward index N-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Up or Left: lines compact toward index 0
    pub fn is_toward_first(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// Down or Right: lines compact toward index N-1
    pub fn is_toward_last(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or a single letter:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Single-letter form used by move scripts (`u`, `d`, `l`, `r`)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete change produced by the grid engine, in emission order.
///
/// Renderers must consume events in the order they were emitted:
/// - `Move` with `from == to` is a no-op.
/// - `Merge` always follows the two `Move`s that converge on `at`; the
///   renderer removes every tile at `at` and shows exactly one tile of `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A new level-1 tile appeared
    Spawn { at: Coord },
    /// A tile slid from one cell to another
    Move { from: Coord, to: Coord },
    /// Two tiles combined at `at` into one tile of `level`
    Merge { at: Coord, level: Level },
}

impl Event {
    /// True for a `Move` that starts and ends on the same cell
    pub fn is_noop(&self) -> bool {
        matches!(self, Event::Move { from, to } if from == to)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Spawn { .. } => "spawn",
            Event::Move { .. } => "move",
            Event::Merge { .. } => "merge",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Spawn { at } => write!(f, "spawn {at}"),
            Event::Move { from, to } => write!(f, "move {from} -> {to}"),
            Event::Merge { at, level } => write!(f, "merge {at} = {}", tile_value(*level)),
        }
    }
}

/// Game actions that can be applied to a game session
///
/// These actions are produced by keyboard input and by replay scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    PushUp,
    PushDown,
    PushLeft,
    PushRight,
    /// Start a new game on an empty grid
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("pushLeft"), Some(GameAction::PushLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pushup" => Some(GameAction::PushUp),
            "pushdown" => Some(GameAction::PushDown),
            "pushleft" => Some(GameAction::PushLeft),
            "pushright" => Some(GameAction::PushRight),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::PushUp => "pushUp",
            GameAction::PushDown => "pushDown",
            GameAction::PushLeft => "pushLeft",
            GameAction::PushRight => "pushRight",
            GameAction::Restart => "restart",
        }
    }

    /// Push direction carried by this action, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::PushUp => Some(Direction::Up),
            GameAction::PushDown => Some(Direction::Down),
            GameAction::PushLeft => Some(Direction::Left),
            GameAction::PushRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => GameAction::PushUp,
            Direction::Down => GameAction::PushDown,
            Direction::Left => GameAction::PushLeft,
            Direction::Right => GameAction::PushRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_classification_is_a_partition() {
        for d in Direction::ALL {
            assert_ne!(d.is_vertical(), d.is_horizontal(), "{d}");
            assert_ne!(d.is_toward_first(), d.is_toward_last(), "{d}");
        }
        assert!(Direction::Up.is_vertical() && Direction::Up.is_toward_first());
        assert!(Direction::Down.is_vertical() && Direction::Down.is_toward_last());
        assert!(Direction::Left.is_horizontal() && Direction::Left.is_toward_first());
        assert!(Direction::Right.is_horizontal() && Direction::Right.is_toward_last());
    }

    #[test]
    fn direction_round_trips_through_str() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
            assert_eq!(GameAction::from(d).direction(), Some(d));
        }
    }

    #[test]
    fn coord_square_and_transpose() {
        let c = Coord::new(1, 3);
        assert_eq!(c.square(), "sq-13");
        assert_eq!(c.transposed(), Coord::new(3, 1));
        assert_eq!(c.to_string(), "(1, 3)");
    }

    #[test]
    fn noop_only_for_stationary_moves() {
        let a = Coord::new(2, 2);
        assert!(Event::Move { from: a, to: a }.is_noop());
        assert!(!Event::Move { from: a, to: Coord::new(2, 0) }.is_noop());
        assert!(!Event::Spawn { at: a }.is_noop());
        assert!(!Event::Merge { at: a, level: 2 }.is_noop());
    }

    #[test]
    fn tile_value_saturates_past_u64() {
        assert_eq!(tile_value(MAX_LEVEL), 1 << 62);
        assert_eq!(tile_value(63), 1 << 63);
        assert_eq!(tile_value(64), u64::MAX);
        assert_eq!(tile_value(255), u64::MAX);
    }

    #[test]
    fn event_display() {
        let ev = Event::Merge {
            at: Coord::new(0, 1),
            level: 3,
        };
        assert_eq!(ev.to_string(), "merge (0, 1) = 8");
    }
}
