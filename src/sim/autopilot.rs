//! Demo mode - the computer plays
//!
//! Produces [`TickInput`]s that track the ball with a slightly wrong aim so
//! rallies eventually break down and every outcome gets exercised.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;
use super::tick::TickInput;

/// Frames to wait on the paddle before serving
const SERVE_DELAY_TICKS: u32 = 45;
/// Maximum aim error, in pixels either side of the ball
const MAX_AIM_ERROR: f32 = 34.0;
/// Maximum paddle travel per frame (pixels)
const MAX_STEP: f32 = 6.0;

/// Seeded computer player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    aim_offset: f32,
    serve_wait: u32,
    /// Paddle x the autopilot is steering, kept between frames
    x: Option<f32>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_offset: 0.0,
            serve_wait: 0,
            x: None,
        }
    }

    /// Decide this frame's input from the current state
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let current = self
            .x
            .unwrap_or(state.paddle.rect.center_x() as f32);

        if !state.ball.launched {
            self.serve_wait += 1;
            let launch = self.serve_wait >= SERVE_DELAY_TICKS;
            if launch {
                self.serve_wait = 0;
                self.aim_offset = self.rng.random_range(-MAX_AIM_ERROR..=MAX_AIM_ERROR);
            }
            self.x = Some(current);
            return TickInput {
                paddle_x: Some(current),
                launch,
                toggle_mute: false,
            };
        }

        // While the ball falls through the upper half, occasionally re-roll the aim
        if state.ball.vel.y > 0.0
            && state.ball.rect.bottom() < state.paddle.rect.top() / 2
            && self.rng.random_bool(0.05)
        {
            self.aim_offset = self.rng.random_range(-MAX_AIM_ERROR..=MAX_AIM_ERROR);
        }

        let target = state.ball.pos.x + self.aim_offset;
        let next = current + (target - current).clamp(-MAX_STEP, MAX_STEP);
        self.x = Some(next);

        TickInput {
            paddle_x: Some(next),
            launch: false,
            toggle_mute: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;

    #[test]
    fn test_autopilot_serves_after_delay() {
        let mut state = GameState::new(10, 5);
        let mut pilot = Autopilot::new(7);
        let mut events = Vec::new();

        for _ in 0..SERVE_DELAY_TICKS {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, &mut events);
        }
        assert!(state.ball.launched);
    }

    #[test]
    fn test_autopilot_is_deterministic() {
        let mut a = GameState::new(10, 5);
        let mut b = GameState::new(10, 5);
        let mut pa = Autopilot::new(42);
        let mut pb = Autopilot::new(42);
        let mut events = Vec::new();

        for _ in 0..2_000 {
            let ia = pa.next_input(&a);
            let ib = pb.next_input(&b);
            tick(&mut a, &ia, &mut events);
            tick(&mut b, &ib, &mut events);
        }

        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.grid.len(), b.grid.len());
        assert_eq!(a.lives, b.lives);
    }

    #[test]
    fn test_autopilot_paddle_step_is_bounded() {
        let mut state = GameState::new(10, 5);
        state.ball.launched = true;
        state.ball.pos.x = 10.0;
        let mut pilot = Autopilot::new(1);

        let input = pilot.next_input(&state);
        let x = input.paddle_x.unwrap_or_default();
        assert!((x - 160.0).abs() <= MAX_STEP);
    }
}
