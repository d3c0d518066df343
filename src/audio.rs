//! Sound cue boundary
//!
//! The simulation never plays audio itself. The driver drains `GameEvent`s
//! and hands them to an `AudioManager`, which maps them to cues and forwards
//! the loaded ones to a device-level `AudioSink`. Unloaded cues are silent.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Prime number collected
    CollectPrime,
    /// Composite number collected (run ends)
    CollectComposite,
    /// Power-up collected
    CollectPowerUp,
    /// Charge spent on a gravity flip
    GravityFlip,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::CollectPrime,
        SoundEffect::CollectComposite,
        SoundEffect::CollectPowerUp,
        SoundEffect::GravityFlip,
    ];
}

/// Cue for an event, if it has one
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::CollectedPrime { .. } => Some(SoundEffect::CollectPrime),
        GameEvent::CollectedComposite { .. } => Some(SoundEffect::CollectComposite),
        GameEvent::CollectedPowerUp => Some(SoundEffect::CollectPowerUp),
        GameEvent::GravityFlipped { .. } => Some(SoundEffect::GravityFlip),
        _ => None,
    }
}

/// Fire-and-forget playback device
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {:?} (vol {:.2})", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    loaded: HashSet<SoundEffect>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>, loaded: impl IntoIterator<Item = SoundEffect>) -> Self {
        Self {
            sink,
            loaded: loaded.into_iter().collect(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
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

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (no-op if muted or not loaded)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 || !self.loaded.contains(&effect) {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cues for a frame's events, in order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(sound_for) {
            self.play(effect);
        }
    }
}
