//! Scrolling entities
//!
//! Numbers and power-ups enter just past the right edge and scroll left at a
//! fixed speed until collected or gone past the left edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Body, SpriteKind};
use super::mask::Rect;
use super::prime::is_prime;
use super::spawn::Spawn;
use crate::tuning::Tuning;

/// One of the two horizontal travel lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Top,
    Bottom,
}

impl Lane {
    /// Centre line y for this lane
    pub fn y(self, tuning: &Tuning) -> f32 {
        match self {
            Lane::Top => tuning.top_lane_y,
            Lane::Bottom => tuning.bottom_lane_y,
        }
    }
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A numbered token; `prime` is fixed when the entity is created
    Number { value: u32, prime: bool },
    /// Grants a gravity-flip charge
    PowerUp,
}

impl EntityKind {
    pub fn number(value: u32) -> Self {
        EntityKind::Number {
            value,
            prime: is_prime(value as i64),
        }
    }
}

/// A scrolling entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Centre position; y stays on the lane line
    pub pos: Vec2,
    /// Leftward speed (pixels/frame)
    pub speed: f32,
    pub lane: Lane,
    pub width: u32,
    pub height: u32,
}

impl Entity {
    /// Move one frame to the left
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    /// Leading (left) edge has gone past the left playfield boundary
    pub fn is_off_field(&self) -> bool {
        self.pos.x - (self.width as f32) / 2.0 < 0.0
    }

    pub fn is_powerup(&self) -> bool {
        matches!(self.kind, EntityKind::PowerUp)
    }
}

impl Body for Entity {
    fn bounds(&self) -> Rect {
        Rect::new(
            (self.pos.x - self.width as f32 / 2.0).floor() as i32,
            (self.pos.y - self.height as f32 / 2.0).floor() as i32,
            self.width,
            self.height,
        )
    }

    fn sprite(&self) -> SpriteKind {
        match self.kind {
            EntityKind::Number { .. } => SpriteKind::Number,
            EntityKind::PowerUp => SpriteKind::PowerUp,
        }
    }
}

/// The live entity set
///
/// Always in id order: ids only grow on insert and every removal preserves
/// the relative order of what remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityField {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Default for EntityField {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityField {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place an entity of the given kind just off the right edge of `lane`
    pub fn insert(&mut self, kind: EntityKind, lane: Lane, tuning: &Tuning) -> u32 {
        let (size, speed) = match kind {
            EntityKind::Number { .. } => (tuning.number_size, tuning.number_speed),
            EntityKind::PowerUp => (tuning.powerup_size, tuning.powerup_speed),
        };
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind,
            pos: Vec2::new(
                tuning.screen_width as f32 + size as f32 / 2.0,
                lane.y(tuning),
            ),
            speed,
            lane,
            width: size,
            height: size,
        });
        id
    }

    /// Materialize a spawn decision
    pub fn spawn(&mut self, spawn: Spawn, tuning: &Tuning) -> u32 {
        match spawn {
            Spawn::Number { value, lane } => self.insert(EntityKind::number(value), lane, tuning),
            Spawn::PowerUp { lane } => self.insert(EntityKind::PowerUp, lane, tuning),
        }
    }

    /// Scroll every entity one frame; returns those that left the field
    pub fn advance(&mut self) -> Vec<Entity> {
        for entity in &mut self.entities {
            entity.advance();
        }
        let mut exited = Vec::new();
        self.entities.retain(|e| {
            if e.is_off_field() {
                exited.push(e.clone());
                false
            } else {
                true
            }
        });
        exited
    }

    pub fn remove(&mut self, id: u32) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn numbers(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| !e.is_powerup())
    }

    pub fn powerups(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_powerup())
    }

    pub fn powerup_in_flight(&self) -> bool {
        self.entities.iter().any(Entity::is_powerup)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop every entity (ids keep counting up)
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_primality_fixed_at_creation() {
        assert_eq!(EntityKind::number(7), EntityKind::Number { value: 7, prime: true });
        assert_eq!(EntityKind::number(4), EntityKind::Number { value: 4, prime: false });
        assert_eq!(EntityKind::number(1), EntityKind::Number { value: 1, prime: false });
    }

    #[test]
    fn test_spawns_off_right_edge() {
        let tuning = Tuning::default();
        let mut field = EntityField::new();
        let id = field.spawn(Spawn::Number { value: 11, lane: Lane::Top }, &tuning);
        let entity = field.get(id).unwrap();
        assert_eq!(entity.bounds().left(), tuning.screen_width);
        assert_eq!(entity.pos.y, tuning.top_lane_y);
        assert_eq!(entity.speed, tuning.number_speed);

        let id = field.spawn(Spawn::PowerUp { lane: Lane::Bottom }, &tuning);
        let powerup = field.get(id).unwrap();
        assert_eq!(powerup.speed, tuning.powerup_speed);
        assert_eq!(powerup.pos.y, tuning.bottom_lane_y);
        assert!(field.powerup_in_flight());
    }

    #[test]
    fn test_ids_increase() {
        let tuning = Tuning::default();
        let mut field = EntityField::new();
        let a = field.spawn(Spawn::Number { value: 2, lane: Lane::Top }, &tuning);
        let b = field.spawn(Spawn::Number { value: 3, lane: Lane::Top }, &tuning);
        assert!(b > a);
        field.clear();
        let c = field.spawn(Spawn::Number { value: 5, lane: Lane::Top }, &tuning);
        assert!(c > b);
    }

    #[test]
    fn test_advance_moves_left_and_expires() {
        let tuning = Tuning::default();
        let mut field = EntityField::new();
        let id = field.spawn(Spawn::Number { value: 13, lane: Lane::Bottom }, &tuning);
        let x0 = field.get(id).unwrap().pos.x;
        assert!(field.advance().is_empty());
        assert_eq!(field.get(id).unwrap().pos.x, x0 - tuning.number_speed);

        // Travel the width of the screen plus the sprite
        let mut exited = Vec::new();
        for _ in 0..1000 {
            exited = field.advance();
            if !exited.is_empty() {
                break;
            }
        }
        assert_eq!(exited.len(), 1);
        assert_eq!(exited[0].id, id);
        assert!(exited[0].bounds().left() < 0);
        assert!(exited[0].bounds().right() > 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_stays_in_id_order() {
        let tuning = Tuning::default();
        let mut field = EntityField::new();
        let ids: Vec<u32> = (0..6)
            .map(|i| field.spawn(Spawn::Number { value: 2 + i, lane: Lane::Top }, &tuning))
            .collect();
        field.remove(ids[1]);
        field.remove(ids[4]);
        field.advance();
        let next = field.spawn(Spawn::PowerUp { lane: Lane::Bottom }, &tuning);

        let order: Vec<u32> = field.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![ids[0], ids[2], ids[3], ids[5], next]);
    }

    #[test]
    fn test_remove() {
        let tuning = Tuning::default();
        let mut field = EntityField::new();
        let id = field.spawn(Spawn::PowerUp { lane: Lane::Top }, &tuning);
        assert!(field.remove(id).is_some());
        assert!(field.remove(id).is_none());
        assert!(!field.powerup_in_flight());
    }
}
