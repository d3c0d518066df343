//! Spawn scheduling and spawn decisions
//!
//! Spawning runs off an explicit deadline on the session's frame clock rather
//! than an engine timer, so a seeded run always spawns on the same frames.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::field::Lane;
use crate::tuning::Tuning;

/// What the controller decided to emit on a spawn tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spawn {
    Number { value: u32, lane: Lane },
    PowerUp { lane: Lane },
}

/// Spawn deadline and period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnController {
    /// Frame-clock time of the next spawn tick
    pub next_spawn_at_ms: f64,
    /// Current tick period
    pub period_ms: u32,
}

impl SpawnController {
    /// First spawn one period after `clock_ms`
    pub fn new(clock_ms: f64, period_ms: u32) -> Self {
        Self {
            next_spawn_at_ms: clock_ms + period_ms as f64,
            period_ms,
        }
    }

    /// Returns true if a spawn tick is due, moving the deadline one period on
    pub fn poll(&mut self, clock_ms: f64) -> bool {
        if clock_ms >= self.next_spawn_at_ms {
            self.next_spawn_at_ms += self.period_ms as f64;
            true
        } else {
            false
        }
    }

    /// Change the period; the next tick is one new period from now
    pub fn reschedule(&mut self, clock_ms: f64, period_ms: u32) {
        self.period_ms = period_ms;
        self.next_spawn_at_ms = clock_ms + period_ms as f64;
    }

    /// Decide what to emit on a spawn tick
    ///
    /// A power-up is only possible when the player holds no charge and none
    /// is already scrolling.
    pub fn on_tick<R: Rng>(
        &self,
        rng: &mut R,
        tuning: &Tuning,
        max_number: u32,
        charged: bool,
        powerup_in_flight: bool,
    ) -> Spawn {
        let roll_powerup = rng.random_bool(tuning.powerup_spawn_chance);
        let lane = if rng.random_bool(0.5) {
            Lane::Top
        } else {
            Lane::Bottom
        };

        if roll_powerup && !charged && !powerup_in_flight {
            return Spawn::PowerUp { lane };
        }

        let max = max_number.max(tuning.min_number);
        let value = rng.random_range(tuning.min_number..=max);
        Spawn::Number { value, lane }
    }
}
