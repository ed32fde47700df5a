//! Game configuration.
//!
//! Values come from, in increasing priority: built-in defaults, environment
//! variables, then command-line flags applied by the binary.
//!
//! - `TUI_2048_SIZE`: grid side length (default: 4)
//! - `TUI_2048_SEED`: RNG seed for tile placement (default: 1)

use crate::error::EngineError;
use crate::grid::Grid;
use crate::types::DEFAULT_GRID_SIZE;

/// Environment variable holding the grid size
pub const ENV_SIZE: &str = "TUI_2048_SIZE";

/// Environment variable holding the RNG seed
pub const ENV_SEED: &str = "TUI_2048_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Seed for the default random source
    pub seed: u32,
}

impl GameConfig {
    pub fn new(grid_size: usize, seed: u32) -> Self {
        Self { grid_size, seed }
    }

    /// Defaults overridden by `TUI_2048_SIZE` / `TUI_2048_SEED`.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let grid_size = lookup(ENV_SIZE)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.grid_size);
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        Self { grid_size, seed }
    }

    /// Check the grid size is supported
    pub fn validate(&self) -> Result<(), EngineError> {
        Grid::new(self.grid_size).map(|_| ())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.seed, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_and_ignores_garbage() {
        let config = GameConfig::from_lookup(|key| match key {
            ENV_SIZE => Some(" 6 ".to_string()),
            ENV_SEED => Some("not-a-number".to_string()),
            _ => None,
        });
        assert_eq!(config, GameConfig::new(6, 1));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        assert_eq!(
            GameConfig::new(12, 1).validate(),
            Err(EngineError::InvalidGridSize { size: 12 })
        );
    }
}
