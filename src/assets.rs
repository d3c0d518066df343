//! Asset availability with fallback substitution
//!
//! Missing images and sounds are never errors: each missing file is logged
//! once and the render/audio boundaries fall back to placeholder shapes or
//! silence.

use std::collections::HashSet;
use std::path::Path;

use crate::audio::SoundEffect;
use crate::sim::SpriteKind;

/// Sprite image identifier (one per body kind)
pub type SpriteId = SpriteKind;

const SPRITES: [SpriteId; 3] = [SpriteKind::Player, SpriteKind::Number, SpriteKind::PowerUp];

/// File name a sprite is loaded from
pub fn sprite_file(sprite: SpriteId) -> &'static str {
    match sprite {
        SpriteKind::Player => "player.png",
        SpriteKind::Number => "number.png",
        SpriteKind::PowerUp => "powerup.png",
    }
}

/// File name a sound cue is loaded from
pub fn sound_file(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::CollectPrime => "collect_prime.wav",
        SoundEffect::CollectComposite => "collect_composite.wav",
        SoundEffect::CollectPowerUp => "collect_powerup.wav",
        SoundEffect::GravityFlip => "gravity_flip.wav",
    }
}

/// Which assets were found
#[derive(Debug, Clone, Default)]
pub struct Assets {
    sprites: HashSet<SpriteId>,
    sounds: HashSet<SoundEffect>,
}

impl Assets {
    /// Nothing loaded: every sprite is a fallback shape, every cue is silent
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything loaded
    pub fn all() -> Self {
        Self {
            sprites: SPRITES.into_iter().collect(),
            sounds: SoundEffect::ALL.into_iter().collect(),
        }
    }

    /// Probe each known asset file with `exists`, warning about the missing ones
    pub fn probe(mut exists: impl FnMut(&str) -> bool) -> Self {
        let mut assets = Self::none();
        for sprite in SPRITES {
            let file = sprite_file(sprite);
            if exists(file) {
                assets.sprites.insert(sprite);
            } else {
                log::warn!(
                    "Missing sprite {} - using fallback {:?}",
                    file,
                    sprite.fallback_shape()
                );
            }
        }
        for effect in SoundEffect::ALL {
            let file = sound_file(effect);
            if exists(file) {
                assets.sounds.insert(effect);
            } else {
                log::warn!("Missing sound {} - cue will be silent", file);
            }
        }
        log::info!(
            "Assets: {}/{} sprites, {}/{} sounds",
            assets.sprites.len(),
            SPRITES.len(),
            assets.sounds.len(),
            SoundEffect::ALL.len()
        );
        assets
    }

    /// Probe an asset directory on disk
    pub fn from_dir(dir: &Path) -> Self {
        Self::probe(|file| dir.join(file).is_file())
    }

    pub fn has_sprite(&self, sprite: SpriteId) -> bool {
        self.sprites.contains(&sprite)
    }

    pub fn has_sound(&self, effect: SoundEffect) -> bool {
        self.sounds.contains(&effect)
    }

    /// Sound cues that are actually available
    pub fn loaded_sounds(&self) -> impl Iterator<Item = SoundEffect> + '_ {
        self.sounds.iter().copied()
    }
}
