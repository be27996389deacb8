//! Audio system
//!
//! Procedurally generated sound effects - no external files needed!
//! Every effect is a sine tone rendered to PCM at startup; playback goes
//! through an [`AudioSink`] so the game runs the same with or without a device.

pub mod bank;
pub mod output;
pub mod synth;

pub use bank::{SoundBank, SoundEffect};
pub use output::{AudioError, AudioSink, open_default_sink};
pub use synth::{Envelope, SoundBuffer, SynthError, ToneParams, synthesize_tone};

/// Build the sound bank on the default output device.
///
/// Falls back to a permanently silent bank when no device can be opened.
pub fn default_bank(sfx_volume: f32) -> SoundBank {
    match open_default_sink() {
        Ok(sink) => SoundBank::with_volume(Some(sink), sfx_volume),
        Err(e) => {
            log::warn!("{e}");
            SoundBank::with_volume(None, sfx_volume)
        }
    }
}
