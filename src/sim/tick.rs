//! Fixed timestep simulation tick
//!
//! One call per frame: paddle input, launch, ball update, then outcome
//! handling (wall rebuild or life bookkeeping).

use super::state::{GameEvent, GameState, TickOutcome};
use crate::consts::START_LIVES;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle center (mouse x in field pixels)
    pub paddle_x: Option<f32>,
    /// Launch ball (click/space)
    pub launch: bool,
    /// Mute toggle (M)
    pub toggle_mute: bool,
}

/// Advance the game state by one frame.
///
/// Events are appended to `events` in the order they happened; the caller
/// dispatches them (sounds, mute) after rendering.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) -> TickOutcome {
    state.time_ticks += 1;

    if input.toggle_mute {
        events.push(GameEvent::MuteToggled);
    }

    if let Some(x) = input.paddle_x {
        state.paddle.set_center_x(x);
    }

    if input.launch && state.ball.launch() {
        events.push(GameEvent::Launched);
    }

    let outcome = state.ball.update(&state.paddle, &mut state.grid, events);

    match outcome {
        TickOutcome::StageCleared => {
            log::info!("Stage {} cleared at tick {}", state.stage + 1, state.time_ticks);
            state.next_stage();
            events.push(GameEvent::StageCleared);
        }
        TickOutcome::LifeLost => {
            state.lives = state.lives.saturating_sub(1);
            if state.lives == 0 {
                log::info!("Out of lives, refilling to {}", START_LIVES);
                state.lives = START_LIVES;
            } else {
                log::debug!("Life lost, {} remaining", state.lives);
            }
            // Last brick and the ball went on the same tick
            if state.grid.is_empty() {
                state.next_stage();
                events.push(GameEvent::StageCleared);
            }
        }
        TickOutcome::None => {}
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{Brick, BrickGrid};
    use crate::sim::rect::Rect;
    use crate::palette::GREEN;
    use glam::Vec2;

    #[test]
    fn test_tick_dock_then_launch() {
        let mut state = GameState::new(10, 5);
        let mut events = Vec::new();

        let input = TickInput {
            paddle_x: Some(80.0),
            ..Default::default()
        };
        tick(&mut state, &input, &mut events);
        assert!(!state.ball.launched);
        assert_eq!(state.ball.pos, Vec2::new(80.0, 206.0));
        assert!(events.is_empty());

        let input = TickInput {
            launch: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut events);
        assert!(state.ball.launched);
        assert_eq!(events, vec![GameEvent::Launched]);
        // Moved one step off the paddle
        assert_eq!(state.ball.pos, Vec2::new(84.0, 202.0));

        // A second launch press is ignored
        events.clear();
        tick(&mut state, &input, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_mute_toggle_is_reported() {
        let mut state = GameState::new(10, 5);
        let mut events = Vec::new();
        let input = TickInput {
            toggle_mute: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut events);
        assert_eq!(events, vec![GameEvent::MuteToggled]);
    }

    #[test]
    fn test_clearing_wall_rebuilds_and_docks() {
        let mut state = GameState::new(10, 5);
        state.grid = BrickGrid::from_bricks(vec![Brick {
            rect: Rect::new(100, 50, 32, 12),
            color: GREEN,
        }]);
        state.ball.launched = true;
        state.ball.pos = Vec2::new(116.0, 67.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let mut events = Vec::new();
        let outcome = tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(outcome, TickOutcome::StageCleared);
        assert_eq!(state.stage, 1);
        assert_eq!(state.grid.len(), 45);
        assert!(!state.ball.launched);
        assert_eq!(
            events,
            vec![GameEvent::BrickBroken { color: GREEN }, GameEvent::StageCleared]
        );
    }

    #[test]
    fn test_last_brick_and_ball_lost_together() {
        let mut state = GameState::new(10, 5);
        state.paddle.set_center_x(300.0);
        state.grid = BrickGrid::from_bricks(vec![Brick {
            rect: Rect::new(100, 236, 32, 12),
            color: GREEN,
        }]);
        state.ball.launched = true;
        state.ball.pos = Vec2::new(110.0, 240.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let mut events = Vec::new();
        let outcome = tick(&mut state, &TickInput::default(), &mut events);
        assert_eq!(outcome, TickOutcome::LifeLost);
        assert_eq!(state.grid.len(), 45);
        assert_eq!(state.stage, 1);
        assert_eq!(events.last(), Some(&GameEvent::StageCleared));
    }

    #[test]
    fn test_life_lost_decrements_and_refills() {
        let mut state = GameState::new(10, 5);
        let mut events = Vec::new();
        let input = TickInput {
            paddle_x: Some(300.0),
            ..Default::default()
        };

        for expected in [2, 1, START_LIVES] {
            state.ball.launched = true;
            state.ball.pos = Vec2::new(60.0, 239.0);
            state.ball.vel = Vec2::new(0.0, 5.0);
            let outcome = tick(&mut state, &input, &mut events);
            assert_eq!(outcome, TickOutcome::LifeLost);
            assert_eq!(state.lives, expected);
        }
        assert_eq!(state.grid.len(), 45);
    }
}
