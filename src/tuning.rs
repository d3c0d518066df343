//! Data-driven game balance
//!
//! Every constant the simulation reads lives here. A `Tuning` is validated
//! once when a session is created; the per-frame code trusts it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised for a configuration that breaks a simulation contract
#[derive(Debug)]
pub enum ConfigError {
    /// `min_spawn_delay_ms` is larger than `initial_spawn_delay_ms`
    SpawnDelayRange { min: u32, initial: u32 },
    /// Spawn interval must stay positive
    ZeroSpawnDelay,
    /// Entity values must be at least 1
    MinNumberZero,
    /// `initial_max_number` is below `min_number`
    NumberRange { min: u32, initial_max: u32 },
    /// `max_number_cap` is below `initial_max_number`
    NumberCap { initial_max: u32, cap: u32 },
    /// Difficulty thresholds need a positive step
    ZeroScoreInterval,
    /// A probability outside [0, 1]
    Probability(f64),
    /// A physical quantity that must be positive and finite
    NonPositive(&'static str),
    /// The ceiling line is not above the ground line with room for the player
    Surfaces { ceiling: i32, ground: i32 },
    /// A body or line that does not fit inside the screen
    OutsidePlayfield(&'static str),
    /// A JSON document could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpawnDelayRange { min, initial } => write!(
                f,
                "min spawn delay {min}ms exceeds initial spawn delay {initial}ms"
            ),
            ConfigError::ZeroSpawnDelay => write!(f, "spawn delay must be positive"),
            ConfigError::MinNumberZero => write!(f, "min number must be at least 1"),
            ConfigError::NumberRange { min, initial_max } => write!(
                f,
                "initial max number {initial_max} is below min number {min}"
            ),
            ConfigError::NumberCap { initial_max, cap } => write!(
                f,
                "max number cap {cap} is below initial max number {initial_max}"
            ),
            ConfigError::ZeroScoreInterval => write!(f, "score interval must be positive"),
            ConfigError::Probability(p) => write!(f, "probability {p} is outside [0, 1]"),
            ConfigError::NonPositive(name) => write!(f, "{name} must be positive"),
            ConfigError::Surfaces { ceiling, ground } => write!(
                f,
                "ceiling line {ceiling} leaves no room for the player above ground line {ground}"
            ),
            ConfigError::OutsidePlayfield(what) => {
                write!(f, "{what} does not fit inside the playfield")
            }
            ConfigError::Parse(err) => write!(f, "invalid tuning JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Game balance and playfield layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// Player bottom rests here under normal gravity
    pub ground_y: i32,
    /// Player top rests here under reversed gravity
    pub ceiling_y: i32,

    // === Player ===
    pub player_x: i32,
    pub player_size: u32,
    pub gravity_strength: f32,
    pub jump_strength: f32,

    // === Entities ===
    pub top_lane_y: f32,
    pub bottom_lane_y: f32,
    pub number_size: u32,
    pub powerup_size: u32,
    pub number_speed: f32,
    pub powerup_speed: f32,
    pub powerup_spawn_chance: f64,

    // === Difficulty ===
    pub min_number: u32,
    pub initial_max_number: u32,
    pub max_number_cap: u32,
    pub max_number_increment: u32,
    pub initial_spawn_delay_ms: u32,
    pub min_spawn_delay_ms: u32,
    pub spawn_delay_decrement_ms: u32,
    pub score_interval: u64,

    // === Rules ===
    pub win_score: u64,

    /// Duration of one simulation frame
    pub frame_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            ceiling_y: CEILING_Y,

            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            gravity_strength: GRAVITY_STRENGTH,
            jump_strength: JUMP_STRENGTH,

            top_lane_y: TOP_LANE_Y,
            bottom_lane_y: BOTTOM_LANE_Y,
            number_size: NUMBER_SIZE,
            powerup_size: POWERUP_SIZE,
            number_speed: NUMBER_SPEED,
            powerup_speed: POWERUP_SPEED,
            powerup_spawn_chance: POWERUP_SPAWN_CHANCE,

            min_number: MIN_NUMBER,
            initial_max_number: INITIAL_MAX_NUMBER,
            max_number_cap: MAX_NUMBER_CAP,
            max_number_increment: MAX_NUMBER_INCREMENT,
            initial_spawn_delay_ms: INITIAL_SPAWN_DELAY,
            min_spawn_delay_ms: MIN_SPAWN_DELAY,
            spawn_delay_decrement_ms: SPAWN_DELAY_DECREMENT,
            score_interval: SCORE_INTERVAL,

            win_score: WIN_SCORE,

            frame_ms: FRAME_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_spawn_delay_ms == 0 {
            return Err(ConfigError::ZeroSpawnDelay);
        }
        if self.min_spawn_delay_ms > self.initial_spawn_delay_ms {
            return Err(ConfigError::SpawnDelayRange {
                min: self.min_spawn_delay_ms,
                initial: self.initial_spawn_delay_ms,
            });
        }
        if self.min_number == 0 {
            return Err(ConfigError::MinNumberZero);
        }
        if self.initial_max_number < self.min_number {
            return Err(ConfigError::NumberRange {
                min: self.min_number,
                initial_max: self.initial_max_number,
            });
        }
        if self.max_number_cap < self.initial_max_number {
            return Err(ConfigError::NumberCap {
                initial_max: self.initial_max_number,
                cap: self.max_number_cap,
            });
        }
        if self.score_interval == 0 {
            return Err(ConfigError::ZeroScoreInterval);
        }
        if !(0.0..=1.0).contains(&self.powerup_spawn_chance) {
            return Err(ConfigError::Probability(self.powerup_spawn_chance));
        }

        let positives = [
            ("gravity_strength", self.gravity_strength),
            ("jump_strength", self.jump_strength),
            ("number_speed", self.number_speed),
            ("powerup_speed", self.powerup_speed),
            ("frame_ms", self.frame_ms as f32),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }
        let sizes = [
            ("screen_width", self.screen_width as i64),
            ("screen_height", self.screen_height as i64),
            ("player_size", self.player_size as i64),
            ("number_size", self.number_size as i64),
            ("powerup_size", self.powerup_size as i64),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(ConfigError::NonPositive(name));
            }
        }

        let width = self.screen_width as i64;
        let height = self.screen_height as i64;
        if self.player_x < 0 || self.player_x as i64 + self.player_size as i64 > width {
            return Err(ConfigError::OutsidePlayfield("player"));
        }
        if self.ceiling_y < 0 || self.ceiling_y as i64 > height {
            return Err(ConfigError::OutsidePlayfield("ceiling_y"));
        }
        if self.ground_y < 0 || self.ground_y as i64 > height {
            return Err(ConfigError::OutsidePlayfield("ground_y"));
        }
        let lanes = [
            ("top_lane_y", self.top_lane_y),
            ("bottom_lane_y", self.bottom_lane_y),
        ];
        for (name, y) in lanes {
            if !(y.is_finite() && (0.0..=self.screen_height as f32).contains(&y)) {
                return Err(ConfigError::OutsidePlayfield(name));
            }
        }

        if self.ground_y - self.ceiling_y < self.player_size as i32 {
            return Err(ConfigError::Surfaces {
                ceiling: self.ceiling_y,
                ground: self.ground_y,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.win_score, 3000);
        assert_eq!(tuning.initial_spawn_delay_ms, 1700);
        assert_eq!(tuning.min_spawn_delay_ms, 600);
        assert_eq!(tuning.score_interval, 200);
    }

    #[test]
    fn test_rejects_inverted_spawn_delays() {
        let tuning = Tuning {
            min_spawn_delay_ms: 2000,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::SpawnDelayRange { min: 2000, initial: 1700 })
        ));
    }

    #[test]
    fn test_rejects_bad_number_range() {
        let zero = Tuning {
            min_number: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::MinNumberZero)));

        let inverted = Tuning {
            min_number: 60,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::NumberRange { .. })
        ));

        let low_cap = Tuning {
            max_number_cap: 10,
            ..Default::default()
        };
        assert!(matches!(low_cap.validate(), Err(ConfigError::NumberCap { .. })));
    }

    #[test]
    fn test_rejects_non_positive_physics() {
        let tuning = Tuning {
            gravity_strength: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonPositive("gravity_strength"))
        ));

        let tuning = Tuning {
            powerup_spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Probability(_))));
    }

    #[test]
    fn test_rejects_geometry_outside_playfield() {
        assert!(matches!(
            Tuning::from_json(r#"{ "screen_width": 30 }"#),
            Err(ConfigError::OutsidePlayfield("player"))
        ));

        let tuning = Tuning {
            player_x: 780,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutsidePlayfield("player"))
        ));

        let tuning = Tuning {
            screen_height: 500,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutsidePlayfield("ground_y"))
        ));

        let tuning = Tuning {
            bottom_lane_y: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutsidePlayfield("bottom_lane_y"))
        ));

        // Player flush with the right edge is fine
        let tuning = Tuning {
            player_x: 760,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let tuning = Tuning::from_json(r#"{ "win_score": 500, "number_speed": 6.0 }"#).unwrap();
        assert_eq!(tuning.win_score, 500);
        assert_eq!(tuning.number_speed, 6.0);
        assert_eq!(tuning.initial_spawn_delay_ms, INITIAL_SPAWN_DELAY);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "score_interval": 0 }"#),
            Err(ConfigError::ZeroScoreInterval)
        ));
    }
}
