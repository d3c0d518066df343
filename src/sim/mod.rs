//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod field;
pub mod mask;
pub mod player;
pub mod prime;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Body, MaskSet, Outcome, SpriteKind, classify_exit, detect};
pub use difficulty::DifficultyCurve;
pub use field::{Entity, EntityField, EntityKind, Lane};
pub use mask::{Mask, Rect, Shape};
pub use player::{GravityDir, Player};
pub use prime::is_prime;
pub use spawn::{Spawn, SpawnController};
pub use state::{GameEvent, GamePhase, GameState, LossReason};
pub use tick::{Action, LoopControl, TickInput, tick};
