//! Game state and core simulation types
//!
//! The ball's float center is authoritative. Its integer rectangle is a
//! projection re-derived every tick and used only for collision tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{BounceAxis, clamp_to_walls, least_penetration_axis, paddle_deflection};
use super::grid::{BrickGrid, max_columns};
use super::rect::Rect;
use crate::Rgb;
use crate::consts::*;

/// Something that happened during a tick.
///
/// The simulation never plays sounds itself; the game loop maps these to
/// sound effects after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball touched the left, right or top edge (once per edge)
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// A brick was destroyed
    BrickBroken { color: Rgb },
    /// Ball left the paddle
    Launched,
    /// Ball fell out the bottom of the field
    LifeLost,
    /// Last brick destroyed; the wall was rebuilt
    StageCleared,
    /// Player toggled sound on/off
    MuteToggled,
}

/// Terminal condition reported by a ball update (at most one per tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickOutcome {
    #[default]
    None,
    LifeLost,
    StageCleared,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                FIELD_WIDTH / 2 - PADDLE_WIDTH / 2,
                FIELD_HEIGHT - PADDLE_BOTTOM_OFFSET,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }
}

impl Paddle {
    /// Move the paddle's horizontal center to `x`, kept inside the field.
    ///
    /// Any finite or infinite `x` is clamped; NaN leaves the paddle where it is.
    pub fn set_center_x(&mut self, x: f32) {
        if x.is_nan() {
            return;
        }
        let half_w = self.rect.w as f32 / 2.0;
        let cx = x.clamp(half_w, FIELD_WIDTH as f32 - half_w);
        self.rect.set_center_x(cx as i32);
        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > FIELD_WIDTH {
            self.rect.set_right(FIELD_WIDTH);
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Continuous center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Integer bounds, centered on `pos`
    pub rect: Rect,
    /// False while docked on the paddle
    pub launched: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        let mut ball = Self {
            pos: field_center(),
            vel: Vec2::from(BALL_START_VEL),
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            launched: false,
        };
        ball.sync_rect();
        ball
    }

    /// Re-center the rectangle on the (truncated) float position
    pub fn sync_rect(&mut self) {
        self.rect.set_center(self.pos.x as i32, self.pos.y as i32);
    }

    /// Slave the ball to the paddle's top-center
    pub fn dock(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(
            paddle.rect.center_x() as f32,
            (paddle.rect.top() - BALL_SIZE / 2 - 1) as f32,
        );
        self.sync_rect();
    }

    /// Release the ball. Returns false if it was already in flight.
    pub fn launch(&mut self) -> bool {
        if self.launched {
            return false;
        }
        self.launched = true;
        if self.vel.y == 0.0 {
            self.vel.y = BALL_LAUNCH_DY;
        }
        true
    }

    /// Back to docked, field center, default velocity
    pub fn reset(&mut self) {
        self.pos = field_center();
        self.vel = Vec2::from(BALL_RESET_VEL);
        self.launched = false;
        self.sync_rect();
    }

    /// Advance one tick: move, bounce off walls, paddle and bricks.
    ///
    /// Pushes a [`GameEvent`] for every contact. At most one brick is removed
    /// per call, the first overlapping one in grid order.
    pub fn update(
        &mut self,
        paddle: &Paddle,
        grid: &mut BrickGrid,
        events: &mut Vec<GameEvent>,
    ) -> TickOutcome {
        if !self.launched {
            self.dock(paddle);
            return TickOutcome::None;
        }

        self.pos += self.vel;
        self.sync_rect();

        // Walls
        let contact = clamp_to_walls(&mut self.rect, FIELD_WIDTH);
        if contact.side {
            self.pos.x = self.rect.center_x() as f32;
            self.vel.x = -self.vel.x;
            events.push(GameEvent::WallBounce);
        }
        if contact.top {
            self.pos.y = self.rect.center_y() as f32;
            self.vel.y = -self.vel.y;
            events.push(GameEvent::WallBounce);
        }

        // Paddle (only while falling)
        if self.vel.y > 0.0 && self.rect.overlaps(&paddle.rect) {
            self.rect.set_bottom(paddle.rect.top() - 1);
            self.pos.y = self.rect.center_y() as f32;
            self.vel.y = -self.vel.y.abs();
            self.vel.x = paddle_deflection(self.rect.center_x(), &paddle.rect);
            events.push(GameEvent::PaddleBounce);
        }

        // Bricks
        let mut cleared = false;
        if let Some(index) = grid.first_overlap(&self.rect) {
            let brick = grid.remove(index);
            match least_penetration_axis(&self.rect, &brick.rect) {
                BounceAxis::Horizontal => self.vel.x = -self.vel.x,
                BounceAxis::Vertical => self.vel.y = -self.vel.y,
            }
            events.push(GameEvent::BrickBroken { color: brick.color });
            cleared = grid.is_empty();
        }

        // Fell below the field
        if self.rect.top() >= FIELD_HEIGHT {
            events.push(GameEvent::LifeLost);
            self.reset();
            return TickOutcome::LifeLost;
        }

        if cleared {
            TickOutcome::StageCleared
        } else {
            TickOutcome::None
        }
    }
}

fn field_center() -> Vec2 {
    Vec2::new(FIELD_WIDTH as f32 / 2.0, FIELD_HEIGHT as f32 / 2.0)
}

/// Complete game session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub grid: BrickGrid,
    /// Wall size used for every rebuild (already clamped to the field)
    pub columns: u32,
    pub rows: u32,
    /// Informational life counter, refilled when it runs out
    pub lives: u8,
    /// Number of walls cleared this session
    pub stage: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// New session with a `columns x rows` wall; columns are clamped to fit
    pub fn new(columns: u32, rows: u32) -> Self {
        let fit = max_columns(FIELD_WIDTH);
        if columns > fit {
            log::debug!("Clamping brick columns {} -> {}", columns, fit);
        }
        let columns = columns.clamp(1, fit);

        Self {
            paddle: Paddle::default(),
            ball: Ball::new(),
            grid: BrickGrid::build(columns, rows, FIELD_WIDTH),
            columns,
            rows,
            lives: START_LIVES,
            stage: 0,
            time_ticks: 0,
        }
    }

    pub fn from_settings(settings: &crate::Settings) -> Self {
        Self::new(settings.brick_columns, settings.brick_rows)
    }

    /// Rebuild the wall and re-dock the ball
    pub fn next_stage(&mut self) {
        self.stage += 1;
        self.grid = BrickGrid::build(self.columns, self.rows, FIELD_WIDTH);
        self.ball.reset();
    }
}
