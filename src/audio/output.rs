//! Audio output sinks
//!
//! The sound bank only needs something that can start a buffer playing and
//! return immediately. With the `audio` feature the default output device is
//! driven through rodio; without it there is no device and the game is silent.

use std::fmt;

use super::synth::SoundBuffer;

/// Audio device failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No usable output device (or audio support compiled out)
    Unavailable(String),
    /// The device refused a buffer
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Unavailable(msg) => write!(f, "audio output unavailable: {msg}"),
            AudioError::Playback(msg) => write!(f, "audio playback failed: {msg}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Fire-and-forget playback target
pub trait AudioSink {
    /// Start playing `buffer` without waiting for it to finish
    fn play(&self, buffer: &SoundBuffer) -> Result<(), AudioError>;
}

#[cfg(feature = "audio")]
mod device {
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Source};

    use super::{AudioError, AudioSink, SoundBuffer};

    /// Default output device via rodio
    pub struct RodioSink {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl RodioSink {
        pub fn open_default() -> Result<Self, AudioError> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| AudioError::Unavailable(e.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl AudioSink for RodioSink {
        fn play(&self, buffer: &SoundBuffer) -> Result<(), AudioError> {
            let source = SamplesBuffer::new(
                buffer.channels(),
                buffer.sample_rate(),
                buffer.samples().to_vec(),
            );
            self.handle
                .play_raw(source.convert_samples())
                .map_err(|e| AudioError::Playback(e.to_string()))
        }
    }
}

#[cfg(feature = "audio")]
pub use device::RodioSink;

/// Open the default output device
#[cfg(feature = "audio")]
pub fn open_default_sink() -> Result<Box<dyn AudioSink>, AudioError> {
    Ok(Box::new(RodioSink::open_default()?))
}

/// Open the default output device
#[cfg(not(feature = "audio"))]
pub fn open_default_sink() -> Result<Box<dyn AudioSink>, AudioError> {
    Err(AudioError::Unavailable(
        "built without the `audio` feature".to_string(),
    ))
}
