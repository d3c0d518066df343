//! Game session state and the Playing/GameOver/Won state machine
//!
//! One `GameState` is one session. The frame driver owns it and all mutation
//! goes through `tick` and the methods here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{MaskSet, Outcome};
use super::difficulty::DifficultyCurve;
use super::field::{EntityField, Lane};
use super::player::{GravityDir, Player};
use super::spawn::SpawnController;
use crate::tuning::{ConfigError, Tuning};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lost: collected a composite or missed a prime
    GameOver,
    /// Reached the win score
    Won,
}

impl GamePhase {
    /// Terminal phases freeze the simulation until a reset
    pub fn is_over(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Why a run ended in `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    Composite { value: u32 },
    MissedPrime { value: u32 },
}

/// Things that happened during a frame, for audio/UI/logging collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SpawnedNumber { id: u32, value: u32, prime: bool, lane: Lane },
    SpawnedPowerUp { id: u32, lane: Lane },
    Jumped,
    GravityFlipped { gravity: GravityDir },
    CollectedPrime { value: u32, score: u64 },
    CollectedComposite { value: u32 },
    CollectedPowerUp,
    MissedPrime { value: u32 },
    DifficultyRaised { spawn_interval_ms: u32, max_number: u32 },
    Won { score: u64 },
    GameOver { reason: LossReason, score: u64 },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance and layout this session was created with
    pub tuning: Tuning,
    /// Collision masks rasterized from `tuning`
    pub masks: MaskSet,
    /// Shared RNG stream (survives resets)
    pub rng: Pcg32,
    pub score: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub field: EntityField,
    pub difficulty: DifficultyCurve,
    pub spawner: SpawnController,
    /// Frame clock (ms of Playing time since creation)
    pub clock_ms: f64,
    /// Simulated frame counter
    pub time_ticks: u64,
    /// Events since the driver last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with an RNG seeded from `seed`
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Create a session around an existing RNG stream
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let difficulty = DifficultyCurve::new(&tuning);
        Ok(Self {
            masks: MaskSet::from_tuning(&tuning),
            rng,
            score: 0,
            phase: GamePhase::Playing,
            player: Player::new(&tuning),
            field: EntityField::new(),
            spawner: SpawnController::new(0.0, difficulty.spawn_interval_ms),
            difficulty,
            clock_ms: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        })
    }

    /// Start over: fresh player, empty field, initial difficulty, score 0
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.player = Player::new(&self.tuning);
        self.field.clear();
        self.difficulty.reset();
        self.spawner
            .reschedule(self.clock_ms, self.difficulty.spawn_interval_ms);
        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one outcome; ignored unless Playing
    ///
    /// Returns false once the session has left Playing so callers can stop
    /// processing the rest of the frame's outcomes.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        match outcome {
            Outcome::CollectPrime { id, value } => {
                self.field.remove(id);
                self.score += value as u64;
                self.events.push(GameEvent::CollectedPrime {
                    value,
                    score: self.score,
                });
                if self.score >= self.tuning.win_score {
                    self.win();
                }
            }
            Outcome::CollectComposite { id, value } => {
                self.field.remove(id);
                self.events.push(GameEvent::CollectedComposite { value });
                self.lose(LossReason::Composite { value });
            }
            Outcome::CollectPowerUp { id } => {
                self.field.remove(id);
                self.player.grant_charge();
                self.events.push(GameEvent::CollectedPowerUp);
            }
            Outcome::MissPrime { value, .. } => {
                self.events.push(GameEvent::MissedPrime { value });
                self.lose(LossReason::MissedPrime { value });
            }
        }

        self.phase == GamePhase::Playing
    }

    /// Apply outcomes in order, stopping at the first one that ends the run
    pub fn apply_all(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        for outcome in outcomes {
            if !self.apply(outcome) {
                break;
            }
        }
    }

    fn win(&mut self) {
        self.phase = GamePhase::Won;
        self.events.push(GameEvent::Won { score: self.score });
        log::info!("Won with score {}", self.score);
    }

    fn lose(&mut self, reason: LossReason) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            reason,
            score: self.score,
        });
        log::info!("Game over ({:?}) at score {}", reason, self.score);
    }
}
