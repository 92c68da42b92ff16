//! Sound effect routing
//!
//! The simulation only raises [`GameEvent`]s; this module turns the audible
//! ones into [`SoundEffect`]s and hands them to whatever can play sound.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Wing flap
    Flap,
    /// Gap passed
    Score,
    /// Bumped the ceiling
    HitCeiling,
    /// Hit the floor
    HitFloor,
    /// Hit a pipe
    HitPipe,
    /// Jingle played a moment after a fatal hit
    Death,
}

impl SoundEffect {
    /// Effect for a simulation event, if it makes a sound
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Flap => Some(Self::Flap),
            GameEvent::Score => Some(Self::Score),
            GameEvent::HitCeiling => Some(Self::HitCeiling),
            GameEvent::HitFloor => Some(Self::HitFloor),
            GameEvent::HitPipe => Some(Self::HitPipe),
            GameEvent::Death => Some(Self::Death),
            GameEvent::NewBest
            | GameEvent::RunEnded
            | GameEvent::Restartable
            | GameEvent::Restart => None,
        }
    }

    /// Asset file the effect is usually backed by
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Flap => "flap.wav",
            Self::Score => "score.wav",
            Self::HitCeiling => "hit_ceiling.wav",
            Self::HitFloor => "hit_floor.wav",
            Self::HitPipe => "hit_pipe.wav",
            Self::Death => "death.wav",
        }
    }
}

/// Something that can play a sound effect at a volume (0.0 - 1.0)
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sound {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        };
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for one frame's events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for effect in events.iter().copied().filter_map(SoundEffect::for_event) {
            self.sink.play(effect, vol);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
