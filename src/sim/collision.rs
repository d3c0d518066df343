//! Collision detection and outcome classification
//!
//! Player vs entity contact is decided per pixel: the bounding rects must
//! intersect and at least one pixel must be solid in both masks. Detection
//! only classifies; `GameState::apply` turns outcomes into score and phase
//! changes.

use serde::{Deserialize, Serialize};

use super::field::{Entity, EntityField, EntityKind};
use super::mask::{Mask, Rect, Shape, masks_overlap};
use super::player::Player;
use crate::tuning::Tuning;

/// Which mask/sprite a body uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Number,
    PowerUp,
}

impl SpriteKind {
    /// Placeholder shape when no sprite image is available
    pub fn fallback_shape(self) -> Shape {
        match self {
            SpriteKind::Player => Shape::Ellipse,
            SpriteKind::Number => Shape::Ellipse,
            SpriteKind::PowerUp => Shape::Diamond,
        }
    }
}

/// Anything with a screen rect and a mask
pub trait Body {
    fn bounds(&self) -> Rect;
    fn sprite(&self) -> SpriteKind;
}

/// One mask per sprite kind, shared by every body of that kind
#[derive(Debug, Clone)]
pub struct MaskSet {
    pub player: Mask,
    pub number: Mask,
    pub powerup: Mask,
}

impl MaskSet {
    /// Rasterize the fallback shapes at the configured sizes
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let shape = |kind: SpriteKind, size: u32| Mask::from_shape(kind.fallback_shape(), size, size);
        Self {
            player: shape(SpriteKind::Player, tuning.player_size),
            number: shape(SpriteKind::Number, tuning.number_size),
            powerup: shape(SpriteKind::PowerUp, tuning.powerup_size),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> &Mask {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Number => &self.number,
            SpriteKind::PowerUp => &self.powerup,
        }
    }
}

/// Pixel-level contact between two bodies
pub fn bodies_touch(a: &impl Body, b: &impl Body, masks: &MaskSet) -> bool {
    masks_overlap(
        &a.bounds(),
        masks.get(a.sprite()),
        &b.bounds(),
        masks.get(b.sprite()),
    )
}

/// Classified result of a contact or an exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    CollectPrime { id: u32, value: u32 },
    CollectComposite { id: u32, value: u32 },
    CollectPowerUp { id: u32 },
    /// A prime scrolled off uncollected
    MissPrime { id: u32, value: u32 },
}

impl Outcome {
    /// Entity the outcome refers to
    pub fn entity_id(&self) -> u32 {
        match *self {
            Outcome::CollectPrime { id, .. }
            | Outcome::CollectComposite { id, .. }
            | Outcome::CollectPowerUp { id }
            | Outcome::MissPrime { id, .. } => id,
        }
    }
}

fn classify_contact(entity: &Entity) -> Outcome {
    match entity.kind {
        EntityKind::Number { value, prime: true } => Outcome::CollectPrime {
            id: entity.id,
            value,
        },
        EntityKind::Number { value, prime: false } => Outcome::CollectComposite {
            id: entity.id,
            value,
        },
        EntityKind::PowerUp => Outcome::CollectPowerUp { id: entity.id },
    }
}

/// All entities the player touches this frame: numbers first, then power-ups,
/// each in id order
pub fn detect(player: &Player, field: &EntityField, masks: &MaskSet) -> Vec<Outcome> {
    let numbers = field.numbers().filter(|e| bodies_touch(player, *e, masks));
    let powerups = field.powerups().filter(|e| bodies_touch(player, *e, masks));
    numbers.chain(powerups).map(classify_contact).collect()
}

/// An entity leaving the field only matters if it was a prime
pub fn classify_exit(entity: &Entity) -> Option<Outcome> {
    match entity.kind {
        EntityKind::Number { value, prime: true } => Some(Outcome::MissPrime {
            id: entity.id,
            value,
        }),
        _ => None,
    }
}
