use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::space::Space;

/// Default tick duration in milliseconds
pub const DEFAULT_TICK_MS: f64 = 140.0;

/// Shortest accepted tick; anything smaller stops shrinking the accumulator
pub const MIN_TICK_MS: f64 = 1.0;

/// Largest accepted board, in cells
pub const MAX_CELLS: usize = 1 << 24;

/// Reasons a [`GameConfig`] cannot start a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}x{depth}")]
    EmptySpace {
        width: usize,
        height: usize,
        depth: usize,
    },
    #[error("a {width}x{height}x{depth} grid exceeds {max} cells", max = MAX_CELLS)]
    SpaceTooLarge {
        width: usize,
        height: usize,
        depth: usize,
    },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("a snake of length {length} does not fit behind the midpoint of a {width}-wide grid")]
    SnakeDoesNotFit { length: usize, width: usize },
    #[error("tick_ms must be a finite number of at least {min}, got {0}", min = MIN_TICK_MS)]
    InvalidTick(f64),
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Depth of the game grid; `None` plays on a flat board
    pub grid_depth: Option<usize>,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Simulated milliseconds per tick
    pub tick_ms: f64,
    /// Generator seed; drawn from entropy when absent
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 16,
            grid_height: 16,
            grid_depth: None,
            initial_snake_length: 3,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a three-axis configuration
    pub fn volumetric(width: usize, height: usize, depth: usize) -> Self {
        Self {
            grid_depth: Some(depth),
            ..Self::new(width, height)
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: f64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn space(&self) -> Space {
        match self.grid_depth {
            Some(depth) => Space::volumetric(self.grid_width, self.grid_height, depth),
            None => Space::planar(self.grid_width, self.grid_height),
        }
    }

    /// Check that a game can be started from this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depth = self.grid_depth.unwrap_or(1);
        if self.grid_width == 0 || self.grid_height == 0 || depth == 0 {
            return Err(ConfigError::EmptySpace {
                width: self.grid_width,
                height: self.grid_height,
                depth,
            });
        }

        let cells = self
            .grid_width
            .checked_mul(self.grid_height)
            .and_then(|area| area.checked_mul(depth));
        if cells.is_none_or(|cells| cells > MAX_CELLS) {
            return Err(ConfigError::SpaceTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                depth,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        // The seed body trails left from the midpoint.
        if self.grid_width / 2 < self.initial_snake_length - 1 {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }

        if !self.tick_ms.is_finite() || self.tick_ms < MIN_TICK_MS {
            return Err(ConfigError::InvalidTick(self.tick_ms));
        }

        Ok(())
    }
}
