//! Player body physics
//!
//! Vertical motion only: the body falls toward its current resting surface
//! (ground under normal gravity, ceiling when reversed). Units are pixels and
//! frames; one `update` is one frame.

use serde::{Deserialize, Serialize};

use super::collision::{Body, SpriteKind};
use super::mask::Rect;
use crate::tuning::Tuning;

/// Direction gravity pulls the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDir {
    /// Toward the ground (+y), the initial direction
    #[default]
    Down,
    /// Toward the ceiling (-y)
    Up,
}

impl GravityDir {
    /// +1 for down, -1 for up
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            GravityDir::Down => 1.0,
            GravityDir::Up => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Down,
        }
    }
}

/// The player's body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge (no horizontal physics)
    pub x: i32,
    /// Top edge, sub-pixel accumulator
    pub y: f32,
    /// Vertical velocity (pixels/frame)
    pub vy: f32,
    pub gravity: GravityDir,
    /// Resting on the surface gravity points at
    pub grounded: bool,
    /// Holds a gravity-flip charge from a power-up
    pub charged: bool,
    pub width: u32,
    pub height: u32,
}

impl Player {
    /// A fresh player standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        Self {
            x: tuning.player_x,
            y: (tuning.ground_y - size as i32) as f32,
            vy: 0.0,
            gravity: GravityDir::Down,
            grounded: true,
            charged: false,
            width: size,
            height: size,
        }
    }

    /// Quantized top edge used for rendering and collision
    #[inline]
    pub fn render_y(&self) -> i32 {
        self.y.floor() as i32
    }

    /// Advance one frame under gravity and settle on the resting surface
    pub fn update(&mut self, tuning: &Tuning) {
        self.vy += tuning.gravity_strength * self.gravity.sign();
        self.y += self.vy;

        match self.gravity {
            GravityDir::Down => {
                if self.render_y() + self.height as i32 >= tuning.ground_y {
                    self.settle((tuning.ground_y - self.height as i32) as f32);
                }
            }
            GravityDir::Up => {
                if self.render_y() <= tuning.ceiling_y {
                    self.settle(tuning.ceiling_y as f32);
                }
            }
        }

        self.x = self.x.clamp(0, tuning.screen_width - self.width as i32);
    }

    fn settle(&mut self, y: f32) {
        self.y = y;
        self.vy = 0.0;
        self.grounded = true;
    }

    /// Jump away from the resting surface. Returns false if airborne.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = -tuning.jump_strength * self.gravity.sign();
        self.grounded = false;
        true
    }

    /// Spend the charge to reverse gravity, snapping to the opposite surface
    ///
    /// Returns whether the flip happened (false without a charge).
    pub fn flip_gravity(&mut self, tuning: &Tuning) -> bool {
        if !self.charged {
            return false;
        }
        self.gravity = self.gravity.flipped();
        let y = match self.gravity {
            GravityDir::Down => tuning.ground_y - self.height as i32,
            GravityDir::Up => tuning.ceiling_y,
        };
        self.settle(y as f32);
        self.charged = false;
        true
    }

    /// Grant a charge; holding one already does not stack
    pub fn grant_charge(&mut self) {
        self.charged = true;
    }
}

impl Body for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.render_y(), self.width, self.height)
    }

    fn sprite(&self) -> SpriteKind {
        SpriteKind::Player
    }
}
