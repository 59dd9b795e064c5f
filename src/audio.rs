use rodio::{OutputStream, OutputStreamHandle, Sink, Source, source::SineWave};
use std::time::Duration;
use tracing::warn;

use crate::game::GameEvent;

/// Fire-and-forget sound cues. Nothing waits for a cue to finish.
pub trait AudioSink {
    fn play_shoot(&self);
    fn play_explosion(&self, frequency: f32);
    fn play_power_up(&self);

    /// Plays the cue matching `event`, if it has one.
    fn play_event(&self, event: &GameEvent) {
        match event {
            GameEvent::Shot => self.play_shoot(),
            GameEvent::EnemyDestroyed { frequency } => self.play_explosion(*frequency),
            GameEvent::PowerUpCollected(_) => self.play_power_up(),
            GameEvent::LevelUp { .. } | GameEvent::GameOver { .. } => {}
        }
    }
}

/// Cue sink that plays nothing, used when muted or without an audio device.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_shoot(&self) {}
    fn play_explosion(&self, _frequency: f32) {}
    fn play_power_up(&self) {}
}

const SHOOT_FREQUENCY: f32 = 880.0;
const POWER_UP_FREQUENCY: f32 = 660.0;
const CUE_VOLUME: f32 = 0.1;
const CUE_ATTACK: Duration = Duration::from_millis(50);

/// Audio manager that synthesises short sine tones for each cue
pub struct AudioManager {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl AudioManager {
    /// Opens the default output device.
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Returns a real sink when possible, otherwise a silent one.
    pub fn open_or_silent(muted: bool) -> Box<dyn AudioSink> {
        if muted {
            return Box::new(SilentAudio);
        }

        match Self::new() {
            Ok(manager) => Box::new(manager),
            Err(err) => {
                warn!(error = %err, "failed to initialize audio, continuing without sound");
                Box::new(SilentAudio)
            }
        }
    }

    fn play_tone(&self, frequency: f32, length: Duration) {
        // Playback errors are dropped; a missing beep must not stop the game
        if let Ok(sink) = Sink::try_new(&self.stream_handle) {
            let tone = SineWave::new(frequency)
                .take_duration(length)
                .amplify(CUE_VOLUME)
                .fade_in(CUE_ATTACK);
            sink.append(tone);
            sink.detach();
        }
    }
}

impl AudioSink for AudioManager {
    fn play_shoot(&self) {
        self.play_tone(SHOOT_FREQUENCY, Duration::from_millis(200));
    }

    fn play_explosion(&self, frequency: f32) {
        self.play_tone(frequency, Duration::from_millis(500));
    }

    fn play_power_up(&self) {
        self.play_tone(POWER_UP_FREQUENCY, Duration::from_millis(300));
    }
}
