//! Famicom Breakout - a low-res brick breaker
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ball, paddle, brick grid, collisions)
//! - `audio`: Procedurally synthesized sound effects and the sound bank
//! - `renderer`: Read-only draw list projection of the game state
//! - `settings`: User preferences loaded from JSON

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{SoundBank, SoundEffect};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the game loop
    pub const FPS: u32 = 60;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 320;
    pub const FIELD_HEIGHT: i32 = 240;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 60;
    pub const PADDLE_HEIGHT: i32 = 10;
    /// Distance from the paddle top to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: i32 = 30;
    /// Lateral speed imparted at the very edge of the paddle
    pub const PADDLE_MAX_DEFLECT: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 6;
    pub const BALL_START_VEL: (f32, f32) = (4.0, -4.0);
    pub const BALL_RESET_VEL: (f32, f32) = (4.0, 0.0);
    /// Vertical speed given to a ball launched with no vertical velocity
    pub const BALL_LAUNCH_DY: f32 = -4.0;

    /// Brick wall layout
    pub const BRICK_WIDTH: i32 = 32;
    pub const BRICK_HEIGHT: i32 = 12;
    pub const BRICK_GAP: i32 = 2;
    pub const BRICK_TOP: i32 = 50;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_ROWS: u32 = 5;

    /// Lives at the start of a session
    pub const START_LIVES: u8 = 3;
}

/// RGB color triple
pub type Rgb = (u8, u8, u8);

/// Famicom palette approximations
pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = (255, 255, 255);
    pub const RED: Rgb = (248, 56, 0);
    pub const ORANGE: Rgb = (248, 120, 88);
    pub const YELLOW: Rgb = (248, 248, 56);
    pub const GREEN: Rgb = (0, 232, 216);
    pub const BLUE: Rgb = (120, 120, 248);

    /// Brick colors, cycled by row
    pub const BRICK_COLORS: [Rgb; 5] = [RED, ORANGE, YELLOW, GREEN, BLUE];
}
