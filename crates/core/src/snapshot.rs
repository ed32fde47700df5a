use crate::types::{Coord, Level, DEFAULT_GRID_SIZE, EMPTY, MAX_GRID_SIZE};

/// Read-only copy of a game session, cheap to hand to renderers.
///
/// Cells outside `size` x `size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    pub cells: [[Level; MAX_GRID_SIZE]; MAX_GRID_SIZE],
    pub score: u64,
    pub best_score: u64,
    pub highest_level: Level,
    pub best_level: Level,
    pub moves: u32,
    pub episode_id: u32,
    pub started: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[EMPTY; MAX_GRID_SIZE]; MAX_GRID_SIZE];
        self.score = 0;
        self.highest_level = EMPTY;
        self.moves = 0;
        self.started = false;
        self.game_over = false;
    }

    pub fn level_at(&self, coord: Coord) -> Option<Level> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        Some(self.cells[coord.row][coord.col])
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: [[EMPTY; MAX_GRID_SIZE]; MAX_GRID_SIZE],
            score: 0,
            best_score: 0,
            highest_level: EMPTY,
            best_level: EMPTY,
            moves: 0,
            episode_id: 0,
            started: false,
            game_over: false,
        }
    }
}
