//! Famicom Breakout entry point
//!
//! Runs the fixed 60 Hz game loop headless, with the autopilot standing in for
//! the mouse. Usage: `famicom-breakout [settings.json]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use famicom_breakout::audio::{self, SoundEffect};
use famicom_breakout::consts::FPS;
use famicom_breakout::renderer;
use famicom_breakout::sim::{Autopilot, GameEvent, GameState, TickOutcome, tick};
use famicom_breakout::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from(&path),
        None => Settings::default(),
    };
    log::info!(
        "Famicom Breakout: {}x{} wall, {} frames",
        settings.grid_columns(),
        settings.brick_rows,
        settings.demo_frames
    );

    let mut sfx = audio::default_bank(settings.effective_volume());
    sfx.set_muted(settings.muted);

    let mut state = GameState::from_settings(&settings);
    let mut pilot = Autopilot::new(settings.autopilot_seed);
    let mut events = Vec::new();

    let frame_time = Duration::from_secs(1) / FPS;
    let mut lives_lost = 0u32;
    let mut bricks_broken = 0u32;

    for _ in 0..settings.demo_frames {
        let frame_start = Instant::now();

        // Input -> paddle -> ball -> outcome
        let input = pilot.next_input(&state);
        events.clear();
        match tick(&mut state, &input, &mut events) {
            TickOutcome::LifeLost => lives_lost += 1,
            TickOutcome::StageCleared => log::info!("Wall {} cleared!", state.stage),
            TickOutcome::None => {}
        }

        // Render
        let vertices = renderer::draw_list(&state);
        log::trace!("Frame {}: {} vertices", state.time_ticks, vertices.len());

        // Sound
        for event in &events {
            match event {
                GameEvent::MuteToggled => {
                    let on = sfx.toggle_mute();
                    log::info!("Sound {}", if on { "on" } else { "off" });
                }
                GameEvent::BrickBroken { .. } => bricks_broken += 1,
                _ => {}
            }
            if let Some(effect) = SoundEffect::for_event(event) {
                sfx.play(effect);
            }
        }

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "Done after {} ticks: {} bricks broken, {} walls cleared, {} lives lost",
        state.time_ticks,
        bricks_broken,
        state.stage,
        lives_lost
    );
}
