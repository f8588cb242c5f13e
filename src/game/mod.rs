//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host drives it through [`GameState::advance`] and the input operations and
//! reads [`GameState::snapshot`] back.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod rng;
pub mod space;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::{Direction, ParseDirectionError};
pub use engine::{StepInfo, StepResult};
pub use food::place_target;
pub use rng::{Lcg, RandomSource};
pub use space::{Position, Space};
pub use state::{CollisionType, GameState, Phase, Snake, Snapshot};
