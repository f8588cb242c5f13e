//! Grid Snake - a deterministic snake simulation on 2D or 3D grids
//!
//! This library provides:
//! - Core game logic (game module): state, tick rule, food placement, scheduler
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
