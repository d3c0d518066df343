//! Prime Parkour - A gravity-flipping prime number collection game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance and config validation
//! - `audio`: Sound cue boundary (fire-and-forget, silent when unloaded)
//! - `render`: Per-frame render snapshots with fallback shapes
//! - `assets`: Asset availability tracking with fallback substitution

pub mod assets;
pub mod audio;
pub mod render;
pub mod sim;
pub mod tuning;

pub use assets::{Assets, SpriteId};
pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use render::{RenderFrame, Renderer};
pub use tuning::{ConfigError, Tuning};

/// Reference configuration constants
///
/// These are the defaults for [`Tuning`]; the simulation itself always reads
/// from the session's `Tuning`.
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// Resting surfaces: player bottom rests on the ground, top on the ceiling
    pub const GROUND_Y: i32 = 550;
    pub const CEILING_Y: i32 = 50;

    /// Player body
    pub const PLAYER_X: i32 = 100;
    pub const PLAYER_SIZE: u32 = 40;
    /// Gravity acceleration (pixels/frame²)
    pub const GRAVITY_STRENGTH: f32 = 0.5;
    /// Jump launch speed (pixels/frame), apex ~361px above the resting surface
    pub const JUMP_STRENGTH: f32 = 19.0;

    /// Lane centre lines
    pub const TOP_LANE_Y: f32 = 150.0;
    pub const BOTTOM_LANE_Y: f32 = 450.0;

    /// Entity sprites
    pub const NUMBER_SIZE: u32 = 40;
    pub const POWERUP_SIZE: u32 = 30;
    /// Scroll speeds (pixels/frame, leftward)
    pub const NUMBER_SPEED: f32 = 4.0;
    pub const POWERUP_SPEED: f32 = 3.0;
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.10;

    /// Number value range progression
    pub const MIN_NUMBER: u32 = 1;
    pub const INITIAL_MAX_NUMBER: u32 = 50;
    pub const MAX_NUMBER_CAP: u32 = 500;
    pub const MAX_NUMBER_INCREMENT: u32 = 25;

    /// Spawn interval progression (milliseconds)
    pub const INITIAL_SPAWN_DELAY: u32 = 1700;
    pub const MIN_SPAWN_DELAY: u32 = 600;
    pub const SPAWN_DELAY_DECREMENT: u32 = 100;
    /// Score step between difficulty thresholds
    pub const SCORE_INTERVAL: u64 = 200;

    pub const WIN_SCORE: u64 = 3000;

    /// Fixed frame duration (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
