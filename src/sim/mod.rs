//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame, no wall-clock time
//! - Stable brick order (grid insertion order)
//! - No rendering or audio dependencies; contacts are reported as events

pub mod autopilot;
pub mod collision;
pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{BounceAxis, WallContact, clamp_to_walls, least_penetration_axis, paddle_deflection};
pub use grid::{Brick, BrickGrid, max_columns};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, TickOutcome};
pub use tick::{TickInput, tick};
