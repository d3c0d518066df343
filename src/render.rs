//! Render snapshots
//!
//! The core hands the renderer a flat description of the frame and gets
//! nothing back. Drawing itself lives outside this crate.

use serde::Serialize;

use crate::assets::Assets;
use crate::sim::{Body, EntityKind, GamePhase, GameState, GravityDir, Rect, Shape, SpriteKind};

/// How a body should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Appearance {
    /// A loaded sprite image
    Sprite(SpriteKind),
    /// Placeholder shape (sprite missing)
    Fallback(Shape),
}

/// One drawable body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub kind: SpriteKind,
    /// Screen rect (top-left origin)
    pub rect: Rect,
    /// Number drawn on top of numeric entities
    pub label: Option<u32>,
    pub appearance: Appearance,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub items: Vec<RenderItem>,
    pub score: u64,
    pub phase: GamePhase,
    pub charged: bool,
    pub gravity: GravityDir,
    /// End-of-run message, shown over the frozen playfield
    pub overlay: Option<&'static str>,
}

/// Drawing collaborator
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame);
}

fn item(body: &impl Body, label: Option<u32>, assets: &Assets) -> RenderItem {
    let kind = body.sprite();
    let appearance = if assets.has_sprite(kind) {
        Appearance::Sprite(kind)
    } else {
        Appearance::Fallback(kind.fallback_shape())
    };
    RenderItem {
        kind,
        rect: body.bounds(),
        label,
        appearance,
    }
}

impl RenderFrame {
    /// Snapshot the session (entities in id order, player last)
    pub fn capture(state: &GameState, assets: &Assets) -> Self {
        let mut items: Vec<RenderItem> = state
            .field
            .iter()
            .map(|entity| {
                let label = match entity.kind {
                    EntityKind::Number { value, .. } => Some(value),
                    EntityKind::PowerUp => None,
                };
                item(entity, label, assets)
            })
            .collect();
        items.push(item(&state.player, None, assets));

        let overlay = match state.phase {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("GAME OVER - press R to restart or Q to quit"),
            GamePhase::Won => Some("YOU WIN! - press R to play again or Q to quit"),
        };

        Self {
            items,
            score: state.score,
            phase: state.phase,
            charged: state.player.charged,
            gravity: state.player.gravity,
            overlay,
        }
    }
}
