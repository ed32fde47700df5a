//! Grid engine - applies pushes and spawns to the grid it owns
//!
//! A push runs the line compactor once per row (Left/Right) or column
//! (Up/Down), index 0 first. Lines are computed against the pre-push grid and
//! committed together, so a push is never partially applied.
//!
//! Event order is row/column index order, and within a line the compactor's
//! emission order. Renderers and tests rely on this order.

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::grid::Grid;
use crate::line::{compact, compact_toward_last};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Coord, Direction, Event, Level, SPAWN_LEVEL};

/// Outcome of a single push
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PushResult {
    /// True iff at least one row or column differs from its pre-push state
    pub changed: bool,
    /// Move/Merge events, in row/column index order
    pub events: Vec<Event>,
}

impl PushResult {
    /// Levels produced by the merges of this push, in emission order
    pub fn merged_levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            Event::Merge { level, .. } => Some(*level),
            _ => None,
        })
    }
}

/// Owns the grid and the randomness port.
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    grid: Grid,
    rng: R,
}

impl<R: RandomSource> Engine<R> {
    /// Create an engine with an empty `size` x `size` grid
    pub fn new(size: usize, rng: R) -> Result<Self, EngineError> {
        Ok(Self::with_grid(Grid::new(size)?, rng))
    }

    /// Create an engine over an existing grid (scenario setup and tests)
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Largest level currently on the grid
    pub fn highest_level(&self) -> Level {
        self.grid.highest_level()
    }

    /// Empty the grid, keeping the random stream where it is
    pub fn reset(&mut self) {
        self.grid.clear();
    }

    /// Push every tile toward `direction`.
    ///
    /// Never spawns; callers spawn when `changed` is true.
    pub fn push(&mut self, direction: Direction) -> PushResult {
        let n = self.grid.size();
        let vertical = direction.is_vertical();
        let mut next = self.grid.clone();
        let mut result = PushResult::default();

        for i in 0..n {
            let old = if vertical {
                self.grid.column(i)
            } else {
                self.grid.row(i)
            };

            let compacted = if direction.is_toward_last() {
                compact_toward_last(&old)
            } else {
                compact(&old)
            };

            for (j, &level) in compacted.line.iter().enumerate() {
                let at = if vertical {
                    Coord::new(j, i)
                } else {
                    Coord::new(i, j)
                };
                next.set(at, level);
            }

            result.changed |= compacted.line != old;
            result
                .events
                .extend(compacted.events.iter().map(|ev| ev.place(i, vertical)));
        }

        self.grid = next;

        debug!(
            %direction,
            changed = result.changed,
            events = result.events.len(),
            "pushed\n{}",
            self.grid
        );

        result
    }

    /// Place a level-1 tile on a uniformly chosen empty cell.
    ///
    /// Fails with [`EngineError::BoardFull`] when no cell is empty. A draw
    /// outside `[0, empty cells)` is clamped to the last empty cell.
    pub fn spawn_tile(&mut self) -> Result<Event, EngineError> {
        let empty = self.grid.empty_coords();
        let Some(&last) = empty.last() else {
            return Err(EngineError::BoardFull);
        };

        let pick = self.rng.next_int(empty.len());
        let at = match empty.get(pick) {
            Some(&at) => at,
            None => {
                warn!(pick, bound = empty.len(), "random source out of range");
                last
            }
        };
        self.grid.set(at, SPAWN_LEVEL);

        debug!(%at, "spawned tile\n{}", self.grid);

        Ok(Event::Spawn { at })
    }
}

/// Parse a direction name, failing with [`EngineError::InvalidDirection`].
pub fn parse_direction(s: &str) -> Result<Direction, EngineError> {
    Direction::from_str(s.trim()).ok_or_else(|| EngineError::InvalidDirection(s.to_string()))
}

/// Parse a move script.
///
/// Tokens are separated by whitespace or commas. A token is either a direction
/// name (`up`, `Left`, ...) or a run of single letters (`uldr`).
pub fn parse_moves(script: &str) -> Result<Vec<Direction>, EngineError> {
    let mut moves = Vec::new();
    for token in script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Some(direction) = Direction::from_str(token) {
            moves.push(direction);
            continue;
        }
        for c in token.chars() {
            let direction = Direction::from_char(c)
                .ok_or_else(|| EngineError::InvalidDirection(token.to_string()))?;
            moves.push(direction);
        }
    }
    Ok(moves)
}
