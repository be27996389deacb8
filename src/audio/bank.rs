//! The game's fixed set of sound effects

use super::output::AudioSink;
use super::synth::{SoundBuffer, SynthError, ToneParams, synthesize_tone};
use crate::sim::GameEvent;

/// Base gain of every effect before the user's volume setting
const BASE_VOLUME: f32 = 0.25;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall or the paddle
    Bounce,
    /// Brick destroyed
    BrickBreak,
    /// Ball leaves the paddle
    Launch,
    /// Ball falls out of the field
    LifeLost,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Bounce,
        SoundEffect::BrickBreak,
        SoundEffect::Launch,
        SoundEffect::LifeLost,
    ];

    /// Frequency (Hz) and length (s) of the effect
    pub fn tone(self) -> (f64, f64) {
        match self {
            SoundEffect::Bounce => (440.0, 0.05),
            SoundEffect::BrickBreak => (660.0, 0.10),
            SoundEffect::Launch => (880.0, 0.12),
            SoundEffect::LifeLost => (220.0, 0.25),
        }
    }

    /// Effect to play for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce | GameEvent::PaddleBounce => Some(SoundEffect::Bounce),
            GameEvent::BrickBroken { .. } => Some(SoundEffect::BrickBreak),
            GameEvent::Launched => Some(SoundEffect::Launch),
            GameEvent::LifeLost => Some(SoundEffect::LifeLost),
            GameEvent::StageCleared | GameEvent::MuteToggled => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Pre-synthesized effects plus a mute switch.
///
/// If there is no output device, or any effect fails to synthesize, the bank
/// is permanently silent; callers never see an error.
pub struct SoundBank {
    sink: Option<Box<dyn AudioSink>>,
    buffers: Option<Vec<SoundBuffer>>,
    muted: bool,
}

impl SoundBank {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        Self::with_volume(sink, 1.0)
    }

    /// Build the bank, scaling every effect by `sfx_volume`
    pub fn with_volume(sink: Option<Box<dyn AudioSink>>, sfx_volume: f32) -> Self {
        let buffers = match &sink {
            Some(_) => match synthesize_all(BASE_VOLUME * sfx_volume) {
                Ok(buffers) => Some(buffers),
                Err(e) => {
                    log::warn!("Sound synthesis failed ({e}) - audio disabled");
                    None
                }
            },
            None => {
                log::warn!("No audio output - audio disabled");
                None
            }
        };

        Self {
            sink: if buffers.is_some() { sink } else { None },
            buffers,
            muted: false,
        }
    }

    /// A bank that never makes a sound
    pub fn silent() -> Self {
        Self {
            sink: None,
            buffers: None,
            muted: true,
        }
    }

    /// Whether a device and all effects are ready
    pub fn is_available(&self) -> bool {
        self.sink.is_some() && self.buffers.is_some()
    }

    /// Muted by the player, or permanently silent because the bank failed to build
    pub fn is_muted(&self) -> bool {
        self.muted || !self.is_available()
    }

    /// True when `play` will actually produce sound
    pub fn is_enabled(&self) -> bool {
        !self.muted && self.is_available()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute flag; returns whether sound is now enabled
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.is_enabled()
    }

    /// Synthesized buffer for an effect
    pub fn buffer(&self, effect: SoundEffect) -> Option<&SoundBuffer> {
        self.buffers.as_ref()?.get(effect.index())
    }

    /// Start an effect if sound is enabled. Never blocks.
    pub fn play(&self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let (Some(sink), Some(buffer)) = (&self.sink, self.buffer(effect)) else {
            return;
        };
        if let Err(e) = sink.play(buffer) {
            log::warn!("Failed to play {:?}: {}", effect, e);
        }
    }
}

fn synthesize_all(volume: f32) -> Result<Vec<SoundBuffer>, SynthError> {
    SoundEffect::ALL
        .iter()
        .map(|effect| {
            let (freq, secs) = effect.tone();
            synthesize_tone(&ToneParams::new(freq, secs, volume))
        })
        .collect()
}
