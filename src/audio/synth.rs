//! Sine tone synthesis
//!
//! Builds a complete 16-bit stereo buffer up front. Every tone gets a short
//! linear attack and a longer linear release so the buffer starts and ends at
//! silence; without them playback clicks at the buffer edges.

use std::f64::consts::TAU;
use std::fmt;

/// Output sample rate used by all game sounds
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Interleaved channels per frame
pub const CHANNELS: u16 = 2;

const ATTACK_SECS: f64 = 0.005;
const RELEASE_SECS: f64 = 0.015;

/// Parameters for a single tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Hz
    pub frequency: f64,
    /// Seconds
    pub duration: f64,
    pub sample_rate: u32,
    /// Linear gain, 0.0 - 1.0
    pub volume: f32,
}

impl ToneParams {
    pub fn new(frequency: f64, duration: f64, volume: f32) -> Self {
        Self {
            frequency,
            duration,
            sample_rate: DEFAULT_SAMPLE_RATE,
            volume,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Number of frames the tone will occupy
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration).floor() as usize
    }
}

/// Why a tone could not be synthesized
#[derive(Debug, Clone, PartialEq)]
pub enum SynthError {
    InvalidFrequency(f64),
    InvalidDuration(f64),
    InvalidVolume(f32),
    ZeroSampleRate,
    /// Attack and release windows do not fit in the buffer
    TooShort { frames: usize, needed: usize },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidFrequency(hz) => write!(f, "invalid tone frequency {hz} Hz"),
            SynthError::InvalidDuration(secs) => write!(f, "invalid tone duration {secs} s"),
            SynthError::InvalidVolume(v) => write!(f, "volume {v} outside 0.0..=1.0"),
            SynthError::ZeroSampleRate => write!(f, "sample rate must be non-zero"),
            SynthError::TooShort { frames, needed } => write!(
                f,
                "tone of {frames} frames is shorter than its {needed}-frame envelope"
            ),
        }
    }
}

impl std::error::Error for SynthError {}

/// Linear attack/release gain curve over a fixed number of frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    len: usize,
    attack: usize,
    release: usize,
}

impl Envelope {
    pub fn new(len: usize, sample_rate: u32) -> Self {
        let sr = sample_rate as f64;
        Self {
            len,
            attack: ((ATTACK_SECS * sr) as usize).max(1),
            release: ((RELEASE_SECS * sr) as usize).max(1),
        }
    }

    pub fn attack_frames(&self) -> usize {
        self.attack
    }

    pub fn release_frames(&self) -> usize {
        self.release
    }

    /// Gain at frame `i`: rises from 0 over the attack (never quite reaching
    /// 1), holds at 1, then falls to exactly 0 on the last frame.
    pub fn gain(&self, i: usize) -> f64 {
        let release_start = self.len.saturating_sub(self.release);
        if i >= release_start {
            if self.release == 1 {
                return 1.0;
            }
            let j = (i - release_start) as f64;
            return 1.0 - j / (self.release - 1) as f64;
        }
        if i < self.attack {
            return i as f64 / self.attack as f64;
        }
        1.0
    }
}

/// Interleaved 16-bit stereo PCM
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer {
    sample_rate: u32,
    samples: Vec<i16>,
}

impl SoundBuffer {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        CHANNELS
    }

    /// Interleaved samples (left, right, left, right, ...)
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / CHANNELS as usize
    }

    /// Left and right sample of frame `i`
    pub fn frame(&self, i: usize) -> Option<(i16, i16)> {
        let base = i * CHANNELS as usize;
        Some((*self.samples.get(base)?, *self.samples.get(base + 1)?))
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}

/// Render an enveloped sine tone
pub fn synthesize_tone(params: &ToneParams) -> Result<SoundBuffer, SynthError> {
    if !params.frequency.is_finite() || params.frequency <= 0.0 {
        return Err(SynthError::InvalidFrequency(params.frequency));
    }
    if !params.duration.is_finite() || params.duration <= 0.0 {
        return Err(SynthError::InvalidDuration(params.duration));
    }
    if !(0.0..=1.0).contains(&params.volume) {
        return Err(SynthError::InvalidVolume(params.volume));
    }
    if params.sample_rate == 0 {
        return Err(SynthError::ZeroSampleRate);
    }

    let frames = params.frame_count();
    let envelope = Envelope::new(frames, params.sample_rate);
    let needed = envelope.attack_frames() + envelope.release_frames();
    if frames < needed {
        return Err(SynthError::TooShort { frames, needed });
    }

    let sr = params.sample_rate as f64;
    let volume = params.volume as f64;
    let mut samples = Vec::with_capacity(frames * CHANNELS as usize);
    for i in 0..frames {
        let t = i as f64 / sr;
        let wave = (TAU * params.frequency * t).sin() * envelope.gain(i) * volume;
        let sample = (wave * 32767.0).clamp(i16::MIN as f64, i16::MAX as f64) as i16;
        samples.push(sample);
        samples.push(sample);
    }

    Ok(SoundBuffer {
        sample_rate: params.sample_rate,
        samples,
    })
}
