//! TileLayer: the renderer's own copy of the tiles, driven only by events.
//!
//! The layer never reads the grid. It replays Spawn/Move/Merge events, so
//! after each batch its visible levels must equal the engine's grid; a
//! mismatch means the event stream is wrong.

use anyhow::{bail, Result};

use crate::types::{Coord, Event, Level, EMPTY, SPAWN_LEVEL};

/// Effect flag from the most recent batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileFx {
    #[default]
    None,
    /// Spawned in the last batch
    New,
    /// Produced by a merge in the last batch
    Merged,
    /// Consumed by a merge; removed when the next batch starts
    Doomed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub at: Coord,
    pub level: Level,
    pub fx: TileFx,
}

impl Tile {
    pub fn is_live(&self) -> bool {
        self.fx != TileFx::Doomed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    size: usize,
    tiles: Vec<Tile>,
}

impl TileLayer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: Vec::with_capacity(size * size + 2),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Every tile, including ones doomed by the last batch
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Drop all tiles (new game)
    pub fn reset(&mut self) {
        self.tiles.clear();
    }

    /// Replay one batch of events.
    ///
    /// Fails if a Move names a cell with no live tile.
    pub fn apply(&mut self, events: &[Event]) -> Result<()> {
        self.tiles.retain(Tile::is_live);
        for tile in &mut self.tiles {
            tile.fx = TileFx::None;
        }

        for ev in events {
            match *ev {
                Event::Spawn { at } => self.tiles.push(Tile {
                    at,
                    level: SPAWN_LEVEL,
                    fx: TileFx::New,
                }),
                Event::Move { from, to } => {
                    if from == to {
                        continue;
                    }
                    match self.tiles.iter_mut().find(|t| t.at == from && t.is_live()) {
                        Some(tile) => tile.at = to,
                        None => bail!("no tile at {from} to move to {to}"),
                    }
                }
                Event::Merge { at, level } => {
                    for tile in self.tiles.iter_mut().filter(|t| t.at == at) {
                        tile.fx = TileFx::Doomed;
                    }
                    self.tiles.push(Tile {
                        at,
                        level,
                        fx: TileFx::Merged,
                    });
                }
            }
        }
        Ok(())
    }

    /// The live tile at `at`, if any
    pub fn occupant(&self, at: Coord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.at == at && t.is_live())
    }

    /// Visible levels as rows (top row first), comparable with `Grid::to_rows`
    pub fn levels(&self) -> Vec<Vec<Level>> {
        let mut rows = vec![vec![EMPTY; self.size]; self.size];
        for tile in self.tiles.iter().filter(|t| t.is_live()) {
            if let Some(cell) = rows
                .get_mut(tile.at.row)
                .and_then(|row| row.get_mut(tile.at.col))
            {
                *cell = tile.level;
            }
        }
        rows
    }
}
