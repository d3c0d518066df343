//! Fixed-frame simulation tick
//!
//! Frame order: input actions, spawn schedule, physics and scrolling (misses),
//! collisions, difficulty. Collisions run before difficulty so a winning
//! collection is settled before the curve reads the new score.

use serde::{Deserialize, Serialize};

use super::collision::{Body, bodies_touch, classify_exit, detect};
use super::field::{Entity, EntityKind};
use super::spawn::Spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete logical actions delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Jump,
    FlipGravity,
    Quit,
    Restart,
}

/// Input commands for a single tick (edge-triggered)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub flip_gravity: bool,
    /// Start over from GameOver/Won
    pub restart: bool,
    /// Leave the frame loop
    pub quit: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

impl TickInput {
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut input = Self::default();
        for action in actions {
            match action {
                Action::Jump => input.jump = true,
                Action::FlipGravity => input.flip_gravity = true,
                Action::Quit => input.quit = true,
                Action::Restart => input.restart = true,
            }
        }
        input
    }
}

/// What the frame driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> LoopControl {
    if input.quit {
        return LoopControl::Quit;
    }

    // GameOver/Won only listen for restart; everything else stays frozen
    if state.phase.is_over() {
        if input.restart {
            state.reset();
        }
        return LoopControl::Continue;
    }

    let mut input = input.clone();
    if input.idle_mode {
        let (jump, flip) = idle_actions(state);
        input.jump |= jump;
        input.flip_gravity |= flip;
    }

    if input.jump && state.player.jump(&state.tuning) {
        state.events.push(GameEvent::Jumped);
    }
    if input.flip_gravity && state.player.flip_gravity(&state.tuning) {
        state.events.push(GameEvent::GravityFlipped {
            gravity: state.player.gravity,
        });
        log::debug!("Gravity flipped to {:?}", state.player.gravity);
    }

    state.time_ticks += 1;
    state.clock_ms = state.time_ticks as f64 * state.tuning.frame_ms;

    // Spawn tick
    if state.spawner.poll(state.clock_ms) {
        let spawn = state.spawner.on_tick(
            &mut state.rng,
            &state.tuning,
            state.difficulty.max_number,
            state.player.charged,
            state.field.powerup_in_flight(),
        );
        let id = state.field.spawn(spawn, &state.tuning);
        let event = match spawn {
            Spawn::Number { value, lane } => GameEvent::SpawnedNumber {
                id,
                value,
                prime: matches!(
                    state.field.get(id).map(|e| e.kind),
                    Some(EntityKind::Number { prime: true, .. })
                ),
                lane,
            },
            Spawn::PowerUp { lane } => GameEvent::SpawnedPowerUp { id, lane },
        };
        log::debug!("Spawn at {:.0}ms: {:?}", state.clock_ms, event);
        state.events.push(event);
    }

    // Physics and scrolling
    state.player.update(&state.tuning);
    let exited = state.field.advance();
    state.apply_all(exited.iter().filter_map(classify_exit));

    // Collisions
    let score_before = state.score;
    if state.phase == GamePhase::Playing {
        let outcomes = detect(&state.player, &state.field, &state.masks);
        state.apply_all(outcomes);
    }

    // Difficulty
    if state.phase == GamePhase::Playing && state.score != score_before {
        let threshold_before = state.difficulty.last_threshold;
        if let Some(interval) = state.difficulty.on_score_changed(state.score) {
            state.spawner.reschedule(state.clock_ms, interval);
        }
        if state.difficulty.last_threshold != threshold_before {
            state.events.push(GameEvent::DifficultyRaised {
                spawn_interval_ms: state.difficulty.spawn_interval_ms,
                max_number: state.difficulty.max_number,
            });
        }
    }

    LoopControl::Continue
}

/// How far ahead (pixels) the idle AI looks for incoming entities
const IDLE_LOOKAHEAD: f32 = 400.0;
/// Frames simulated for one jump arc
const IDLE_JUMP_FRAMES: usize = 120;

/// Idle/demo mode: pick jump and flip actions for the current frame
///
/// Jumps when a simulated jump from here would touch a prime or power-up
/// before any composite. Spends a charge only when nothing is close.
fn idle_actions(state: &GameState) -> (bool, bool) {
    let player = &state.player;
    if !player.grounded {
        return (false, false);
    }

    let player_left = player.bounds().left() as f32;
    let incoming: Vec<Entity> = state
        .field
        .iter()
        .filter(|e| e.pos.x + e.width as f32 / 2.0 >= player_left)
        .filter(|e| e.pos.x - player_left <= IDLE_LOOKAHEAD)
        .cloned()
        .collect();

    if incoming.is_empty() {
        return (false, player.charged);
    }

    let first_contact = simulate_jump(state, incoming);
    let jump = matches!(
        first_contact,
        Some(EntityKind::Number { prime: true, .. } | EntityKind::PowerUp)
    );
    (jump, false)
}

/// Kind of the first entity touched during a jump started this frame
fn simulate_jump(state: &GameState, mut entities: Vec<Entity>) -> Option<EntityKind> {
    let mut ghost = state.player.clone();
    ghost.jump(&state.tuning);
    for _ in 0..IDLE_JUMP_FRAMES {
        ghost.update(&state.tuning);
        for entity in &mut entities {
            entity.advance();
        }
        if let Some(hit) = entities
            .iter()
            .find(|e| bodies_touch(&ghost, *e, &state.masks))
        {
            return Some(hit.kind);
        }
        if ghost.grounded {
            break;
        }
    }
    None
}
