//! Engine error types.

use tui_2048_types::{Level, MAX_GRID_SIZE, MAX_LEVEL, MIN_GRID_SIZE};

/// Errors surfaced synchronously by the grid engine and game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Input that does not name one of up/down/left/right.
    #[error("{0:?} is not a direction")]
    InvalidDirection(String),

    /// No empty cell is left to spawn into. Callers treat this as game over.
    #[error("board is full, no empty cell to spawn into")]
    BoardFull,

    #[error("grid size {size} is outside {}..={}", MIN_GRID_SIZE, MAX_GRID_SIZE)]
    InvalidGridSize { size: usize },

    /// A cell level above `MAX_LEVEL`.
    #[error("level {level} at ({row}, {col}) exceeds the maximum level {}", MAX_LEVEL)]
    InvalidLevel { row: usize, col: usize, level: Level },

    /// Rows passed to `Grid::from_rows` do not form a square.
    #[error("grid rows are not square (expected {expected} cells in row {row})")]
    RaggedRows { row: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::InvalidDirection("north".to_string()).to_string(),
            "\"north\" is not a direction"
        );
        assert_eq!(
            EngineError::BoardFull.to_string(),
            "board is full, no empty cell to spawn into"
        );
        assert_eq!(
            EngineError::InvalidGridSize { size: 9 }.to_string(),
            "grid size 9 is outside 2..=8"
        );
        assert_eq!(
            EngineError::InvalidLevel {
                row: 1,
                col: 0,
                level: 63
            }
            .to_string(),
            "level 63 at (1, 0) exceeds the maximum level 62"
        );
    }
}
